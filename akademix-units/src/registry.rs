//! Category registry - the twelve categories offered by the converter
//!
//! Three primary categories are shown as tabs; the remaining nine live in
//! the "more" grid. Each category owns its own rate table, so the same
//! symbol may appear in two categories without interfering.

use std::sync::LazyLock;
use akademix_core::Number;
use tracing::debug;

use crate::category::{CategoryInfo, Tier, UnitCategory};
use crate::strategy::{AffineUnit, LinearUnit};
use crate::UnitsError;

/// Built-in registry, constructed on first use and never mutated
pub static CATEGORIES: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::builtin);

/// Ordered, immutable set of unit categories
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<UnitCategory>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<UnitCategory>) -> Self {
        CategoryRegistry { categories }
    }

    pub fn builtin() -> Self {
        let registry = Self::new(vec![
            length(),
            weight(),
            temperature(),
            data(),
            speed(),
            angle(),
            area(),
            volume(),
            time(),
            pressure(),
            energy(),
            power(),
        ]);
        debug!(categories = registry.categories.len(), "unit registry ready");
        registry
    }

    /// All categories: primary first, then secondary
    pub fn list(&self) -> &[UnitCategory] {
        &self.categories
    }

    pub fn primary(&self) -> impl Iterator<Item = &UnitCategory> {
        self.categories.iter().filter(|c| c.tier == Tier::Primary)
    }

    pub fn secondary(&self) -> impl Iterator<Item = &UnitCategory> {
        self.categories.iter().filter(|c| c.tier == Tier::Secondary)
    }

    pub fn get(&self, key: &str) -> Result<&UnitCategory, UnitsError> {
        self.categories.iter()
            .find(|c| c.key == key)
            .ok_or_else(|| UnitsError::UnknownCategory(key.to_string()))
    }

    pub fn units_for(&self, key: &str) -> Result<Vec<&'static str>, UnitsError> {
        Ok(self.get(key)?.units())
    }

    pub fn infos(&self) -> Vec<CategoryInfo> {
        self.categories.iter().map(UnitCategory::info).collect()
    }

    /// Convert within `category`. Only an unknown category is an error;
    /// empty input gives an empty result.
    pub fn convert(
        &self,
        value: Option<&Number>,
        from: &str,
        to: &str,
        category: &str,
    ) -> Result<Option<Number>, UnitsError> {
        Ok(self.get(category)?.convert(value, from, to))
    }
}

/// Categories of the built-in registry, in display order
pub fn list_categories() -> &'static [UnitCategory] {
    CATEGORIES.list()
}

pub fn units_for(key: &str) -> Result<Vec<&'static str>, UnitsError> {
    CATEGORIES.units_for(key)
}

/// Convert with the built-in registry
pub fn convert(
    value: Option<&Number>,
    from: &str,
    to: &str,
    category: &str,
) -> Result<Option<Number>, UnitsError> {
    CATEGORIES.convert(value, from, to, category)
}

fn int(n: i64) -> Number {
    Number::from_i64(n)
}

fn dec(significand: i64, scale: u32) -> Number {
    Number::from_decimal(significand, scale)
}

// ========== Primary ==========

fn length() -> UnitCategory {
    UnitCategory::linear("length", "Length (m)", Tier::Primary, "m", vec![
        LinearUnit::new("km", int(1000)),
        LinearUnit::new("m", int(1)),
        LinearUnit::new("cm", dec(1, 2)),
        LinearUnit::new("mm", dec(1, 3)),
        LinearUnit::new("inch", dec(254, 4)),
        LinearUnit::new("ft", dec(3048, 4)),
        LinearUnit::new("mile", dec(160934, 2)),
    ])
}

fn weight() -> UnitCategory {
    UnitCategory::linear("weight", "Weight (kg)", Tier::Primary, "kg", vec![
        LinearUnit::new("kg", int(1)),
        LinearUnit::new("g", dec(1, 3)),
        LinearUnit::new("mg", dec(1, 6)),
        LinearUnit::new("lbs", dec(453592, 6)),
        LinearUnit::new("oz", dec(283495, 7)),
        LinearUnit::new("ton", int(1000)),
    ])
}

// Celsius is the base. Rankine keeps the observed `C = R * 5/4` relation,
// not the absolute scale `R = (C + 273.15) * 9/5`.
fn temperature() -> UnitCategory {
    UnitCategory::affine("temp", "Temperature", Tier::Primary, "C", vec![
        AffineUnit::identity("C"),
        AffineUnit::new("F", int(-32), 5, 9),
        AffineUnit::new("K", dec(-27315, 2), 1, 1),
        AffineUnit::new("R", Number::zero(), 5, 4),
    ])
}

// ========== Secondary ==========

// Binary multiples, counted in bits
fn data() -> UnitCategory {
    UnitCategory::linear("data", "Data (bit)", Tier::Secondary, "bit", vec![
        LinearUnit::new("bit", int(1)),
        LinearUnit::new("Byte", int(8)),
        LinearUnit::new("KB", int(8 << 10)),
        LinearUnit::new("MB", int(8 << 20)),
        LinearUnit::new("GB", int(8 << 30)),
        LinearUnit::new("TB", int(8 << 40)),
    ])
}

fn speed() -> UnitCategory {
    UnitCategory::linear("speed", "Speed (m/s)", Tier::Secondary, "m/s", vec![
        LinearUnit::new("m/s", int(1)),
        LinearUnit::new("km/h", dec(277778, 6)),
        LinearUnit::new("mph", dec(44704, 5)),
        LinearUnit::new("knot", dec(514444, 6)),
        LinearUnit::new("mach", int(343)),
    ])
}

fn angle() -> UnitCategory {
    UnitCategory::linear("angle", "Angle (deg)", Tier::Secondary, "deg", vec![
        LinearUnit::new("deg", int(1)),
        LinearUnit::new("rad", dec(572958, 4)),
        LinearUnit::new("grad", dec(9, 1)),
    ])
}

fn area() -> UnitCategory {
    UnitCategory::linear("area", "Area (m2)", Tier::Secondary, "m2", vec![
        LinearUnit::new("m2", int(1)),
        LinearUnit::new("km2", int(1_000_000)),
        LinearUnit::new("ha", int(10_000)),
        LinearUnit::new("acre", dec(404686, 2)),
    ])
}

fn volume() -> UnitCategory {
    UnitCategory::linear("volume", "Volume (l)", Tier::Secondary, "liter", vec![
        LinearUnit::new("m3", int(1000)),
        LinearUnit::new("liter", int(1)),
        LinearUnit::new("ml", dec(1, 3)),
        LinearUnit::new("gal", dec(378541, 5)),
        LinearUnit::new("barrel", dec(158987, 3)),
    ])
}

fn time() -> UnitCategory {
    UnitCategory::linear("time", "Time (sec)", Tier::Secondary, "sec", vec![
        LinearUnit::new("sec", int(1)),
        LinearUnit::new("min", int(60)),
        LinearUnit::new("hour", int(3600)),
        LinearUnit::new("day", int(86_400)),
        LinearUnit::new("week", int(604_800)),
        LinearUnit::new("year", int(31_536_000)),
    ])
}

fn pressure() -> UnitCategory {
    UnitCategory::linear("press", "Pressure (Pa)", Tier::Secondary, "Pa", vec![
        LinearUnit::new("Pa", int(1)),
        LinearUnit::new("bar", int(100_000)),
        LinearUnit::new("psi", dec(689476, 2)),
        LinearUnit::new("atm", int(101_325)),
    ])
}

fn energy() -> UnitCategory {
    UnitCategory::linear("energy", "Energy (J)", Tier::Secondary, "J", vec![
        LinearUnit::new("J", int(1)),
        LinearUnit::new("kJ", int(1000)),
        LinearUnit::new("cal", dec(4184, 3)),
        LinearUnit::new("kWh", int(3_600_000)),
        LinearUnit::new("BTU", dec(105506, 2)),
    ])
}

fn power() -> UnitCategory {
    UnitCategory::linear("power", "Power (W)", Tier::Secondary, "W", vec![
        LinearUnit::new("W", int(1)),
        LinearUnit::new("kW", int(1000)),
        LinearUnit::new("HP", dec(7457, 1)),
        LinearUnit::new("PK", dec(7355, 1)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn n(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn conv(value: &str, from: &str, to: &str, category: &str) -> Number {
        convert(Some(&n(value)), from, to, category).unwrap().unwrap()
    }

    fn samples() -> Vec<Number> {
        ["0", "1", "-3.5", "42", "0.001", "123456.789"].iter().map(|s| n(s)).collect()
    }

    #[test]
    fn test_order_and_tiers() {
        let keys: Vec<&str> = list_categories().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![
            "length", "weight", "temp",
            "data", "speed", "angle", "area", "volume", "time", "press", "energy", "power",
        ]);
        assert_eq!(CATEGORIES.primary().count(), 3);
        assert_eq!(CATEGORIES.secondary().count(), 9);
        assert!(list_categories()[..3].iter().all(|c| c.tier == Tier::Primary));
    }

    #[test]
    fn test_labels_name_the_base_unit() {
        let labels: Vec<&str> = list_categories().iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![
            "Length (m)", "Weight (kg)", "Temperature",
            "Data (bit)", "Speed (m/s)", "Angle (deg)", "Area (m2)", "Volume (l)",
            "Time (sec)", "Pressure (Pa)", "Energy (J)", "Power (W)",
        ]);
    }

    #[test]
    fn test_every_category_has_default_pair() {
        for cat in list_categories() {
            let units = cat.units();
            assert!(units.len() >= 2, "{} needs two units", cat.key);
            assert!(units.contains(&cat.base()), "{} base missing", cat.key);
            for unit in &units {
                assert!(cat.contains(unit));
            }
        }
    }

    #[test]
    fn test_units_for() {
        assert_eq!(units_for("temp").unwrap(), vec!["C", "F", "K", "R"]);
        assert_eq!(units_for("length").unwrap()[..2], ["km", "m"]);
        assert!(matches!(units_for("flux"), Err(UnitsError::UnknownCategory(k)) if k == "flux"));
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let result = convert(Some(&n("1")), "m", "km", "distance");
        assert!(matches!(result, Err(UnitsError::UnknownCategory(_))));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        for cat in list_categories() {
            let (from, to) = cat.defaults();
            assert_eq!(convert(None, from, to, cat.key).unwrap(), None);
        }
    }

    #[test]
    fn test_temperature_reference_points() {
        assert_eq!(conv("0", "C", "F", "temp"), n("32"));
        assert_eq!(conv("100", "C", "K", "temp"), n("373.15"));
        assert_eq!(conv("32", "F", "C", "temp"), n("0"));
        assert_eq!(conv("212", "F", "K", "temp"), n("373.15"));
        assert_eq!(conv("0", "K", "C", "temp"), n("-273.15"));
    }

    #[test]
    fn test_rankine_keeps_observed_relation() {
        assert_eq!(conv("100", "C", "R", "temp"), n("80"));
        assert_eq!(conv("80", "R", "C", "temp"), n("100"));
    }

    #[test]
    fn test_length_reference_points() {
        assert_eq!(conv("1", "km", "m", "length"), n("1000"));
        assert_eq!(conv("1609.34", "m", "mile", "length"), n("1"));
        assert_eq!(conv("1", "mile", "mm", "length"), n("1609340"));
    }

    #[test]
    fn test_data_is_binary() {
        assert_eq!(conv("1", "KB", "Byte", "data"), n("1024"));
        assert_eq!(conv("1", "TB", "GB", "data"), n("1024"));
        assert_eq!(conv("1", "Byte", "bit", "data"), n("8"));
    }

    #[test]
    fn test_identity_for_every_unit() {
        for cat in list_categories() {
            for unit in cat.units() {
                for x in samples() {
                    let out = convert(Some(&x), unit, unit, cat.key).unwrap().unwrap();
                    assert_eq!(out, x, "{} {}", cat.key, unit);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        for cat in list_categories() {
            let units = cat.units();
            for u in &units {
                for v in &units {
                    for x in samples() {
                        let there = convert(Some(&x), u, v, cat.key).unwrap().unwrap();
                        let back = convert(Some(&there), v, u, cat.key).unwrap().unwrap();
                        assert!(back.approx_eq(&x, TOLERANCE), "{}: {} -> {} -> {}", cat.key, u, v, u);
                    }
                }
            }
        }
    }

    #[test]
    fn test_transitive_through_base() {
        for cat in list_categories().iter().filter(|c| !c.is_affine()) {
            let units = cat.units();
            let x = n("12.5");
            for u in &units {
                for v in &units {
                    for w in &units {
                        let direct = conv("12.5", u, w, cat.key);
                        let via = convert(Some(&x), u, v, cat.key).unwrap().unwrap();
                        let chained = convert(Some(&via), v, w, cat.key).unwrap().unwrap();
                        assert!(chained.approx_eq(&direct, TOLERANCE), "{}: {} {} {}", cat.key, u, v, w);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unrepresented_unit_returns_input() {
        assert_eq!(conv("5", "m", "parsec", "length"), n("5"));
        // symbols are scoped per category
        assert_eq!(conv("5", "kg", "g", "length"), n("5"));
    }
}
