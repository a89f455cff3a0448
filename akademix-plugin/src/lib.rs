//! Akademix Plugin System
//!
//! Widget libraries (units, grades) expose their operations as
//! `FunctionPlugin`s collected in a `PluginRegistry`. Front ends such as
//! the MCP server only ever talk to the registry.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, DEFAULT_DISPLAY_DIGITS};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext,
    };
    pub use akademix_core::prelude::*;
}
