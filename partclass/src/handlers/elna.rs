//! Elna handler: aluminum electrolytic capacitors.
//!
//! Ordering codes look like `RFS-25V471MH3#5`: series code, voltage (either
//! a direct `25V` token or a two-character EIA code like `1E`), a
//! capacitance code (3-digit EIA or R-notation), tolerance letter, and a
//! case-size code. The coded series prefix maps to the descriptive family
//! name Elna uses in its catalog (`RFS` is "Silmic II").
//!
//! Two rules go beyond plain attribute equality:
//! - tier upgrade: a premium series may replace its general-purpose sibling
//!   one-way (Silmic II for Silmic);
//! - cross-series equivalents: a fixed table of mutually interchangeable
//!   series pairs, ratings and case size matching exactly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::decode;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static ORDERING_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(R[A-Z0-9]{2})-(?:(\d+(?:\.\d+)?)V|([0-2][A-Z]))(\d{3}|\d?R\d+)([JKM])([A-Z]\d?)(?:#.*)?$")
        .expect("elna ordering code regex")
});

/// Coded series prefix to catalog family name.
const SERIES_NAMES: &[(&str, &str)] = &[
    ("RFS", "Silmic II"),
    ("RSE", "Silmic"),
    ("ROA", "Cerafine"),
    ("RJH", "Tonerex"),
    ("RVO", "RVO"),
    ("RE3", "RE3"),
    ("RJ3", "RJ3"),
];

/// Case-size code to can dimensions (diameter x height).
const CASE_SIZES: &[(&str, &str)] = &[
    ("E1", "4 x 5 mm"),
    ("F1", "4 x 7 mm"),
    ("G3", "5 x 7 mm"),
    ("H3", "6.3 x 7 mm"),
    ("I4", "8 x 11.5 mm"),
    ("J5", "10 x 12.5 mm"),
    ("K6", "12.5 x 20 mm"),
];

/// One-way tier upgrades: candidate series replaces original series when
/// ratings and case size match. Documented per catalog, not inferred.
const TIER_UPGRADES: &[(&str, &str)] = &[("RFS", "RSE")];

/// Mutually interchangeable series pairs.
const CROSS_SERIES_EQUIVALENTS: &[(&str, &str)] = &[("RE3", "RJ3")];

pub struct ElnaHandler;

struct ElnaCode {
    series: String,
    voltage_v: f64,
    capacitance_uf: f64,
    tolerance: char,
    case_code: String,
}

impl ElnaHandler {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, mpn: &str) -> Option<ElnaCode> {
        let mpn = normalize(mpn);
        let caps = ORDERING_CODE_RE.captures(&mpn)?;

        let series = caps.get(1)?.as_str().to_string();

        let voltage_v = if let Some(direct) = caps.get(2) {
            direct.as_str().parse::<f64>().ok()?
        } else {
            decode::voltage_code(caps.get(3)?.as_str())?
        };

        // Electrolytic capacitance codes are uF-based: 471 -> 470 uF,
        // 4R7 -> 4.7 uF.
        let cap_code = caps.get(4)?.as_str();
        let capacitance_uf = if cap_code.contains('R') {
            decode::r_notation(cap_code)?
        } else {
            decode::eia_code(cap_code)?
        };

        let tolerance = caps.get(5)?.as_str().chars().next()?;
        let case_code = caps.get(6)?.as_str().to_string();

        Some(ElnaCode {
            series,
            voltage_v,
            capacitance_uf,
            tolerance,
            case_code,
        })
    }

    /// Rated voltage in volts, from either voltage notation.
    pub fn extract_voltage_v(&self, mpn: &str) -> Option<f64> {
        self.parse(mpn).map(|code| code.voltage_v)
    }

    /// Nominal capacitance in microfarads.
    pub fn extract_capacitance_uf(&self, mpn: &str) -> Option<f64> {
        self.parse(mpn).map(|code| code.capacitance_uf)
    }

    fn series_code(&self, mpn: &str) -> String {
        self.parse(mpn).map(|code| code.series).unwrap_or_default()
    }

    fn series_replaceable(&self, candidate: &str, original: &str) -> bool {
        if candidate == original {
            return true;
        }
        if TIER_UPGRADES
            .iter()
            .any(|(upper, lower)| *upper == candidate && *lower == original)
        {
            return true;
        }
        CROSS_SERIES_EQUIVALENTS.iter().any(|(a, b)| {
            (*a == candidate && *b == original) || (*b == candidate && *a == original)
        })
    }
}

impl Default for ElnaHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for ElnaHandler {
    fn name(&self) -> &'static str {
        "elna"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        let pattern = r"^R(?:FS|SE|OA|JH|VO|E3|J3)-";
        registry.register(ComponentType::Capacitor, self.name(), pattern)?;
        registry.register(ComponentType::CapacitorElna, self.name(), pattern)?;
        Ok(())
    }

    fn extract_series(&self, mpn: &str) -> String {
        let code = self.series_code(mpn);
        if code.is_empty() {
            return String::new();
        }
        lookup_or_raw(SERIES_NAMES, &code)
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        match self.parse(mpn) {
            Some(code) => lookup_or_raw(CASE_SIZES, &code.case_code),
            None => String::new(),
        }
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let (candidate, original) = match (self.parse(candidate), self.parse(original)) {
            (Some(c), Some(o)) => (c, o),
            _ => return false,
        };

        // Ratings and footprint are load-bearing for every Elna rule.
        if candidate.voltage_v != original.voltage_v
            || candidate.capacitance_uf != original.capacitance_uf
            || candidate.tolerance != original.tolerance
            || candidate.case_code != original.case_code
        {
            return false;
        }

        self.series_replaceable(&candidate.series, &original.series)
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[ComponentType::Capacitor, ComponentType::CapacitorElna]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::CapacitorElna]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_series_maps_to_catalog_name() {
        let handler = ElnaHandler::new();
        assert_eq!(handler.extract_series("RFS-25V471MH3#5"), "Silmic II");
        assert_eq!(handler.extract_series("rse-25v471mh3"), "Silmic");
        assert_eq!(handler.extract_series("ROA-16V101MG3"), "Cerafine");
        assert_eq!(handler.extract_series(""), "");
        assert_eq!(handler.extract_series("GRM188R71C104KA01D"), "");
    }

    #[test]
    fn test_voltage_both_notations() {
        let handler = ElnaHandler::new();
        assert_eq!(handler.extract_voltage_v("RFS-25V471MH3"), Some(25.0));
        assert_eq!(handler.extract_voltage_v("RFS-1E471MH3"), Some(25.0));
        assert_eq!(handler.extract_voltage_v("RFS-1H101MG3"), Some(50.0));
    }

    #[test]
    fn test_capacitance_eia_and_r_notation() {
        let handler = ElnaHandler::new();
        assert_eq!(handler.extract_capacitance_uf("RFS-25V471MH3"), Some(470.0));
        assert_eq!(handler.extract_capacitance_uf("RFS-25V4R7MF1"), Some(4.7));
        assert_eq!(handler.extract_capacitance_uf("RFS-25VR47MF1"), Some(0.47));
    }

    #[test]
    fn test_extract_package_code() {
        let handler = ElnaHandler::new();
        assert_eq!(handler.extract_package_code("RFS-25V471MH3#5"), "6.3 x 7 mm");
        assert_eq!(handler.extract_package_code("RFS-25V4R7MF1"), "4 x 7 mm");
        assert_eq!(handler.extract_package_code(""), "");
        // Unknown case code falls back to the raw token.
        assert_eq!(handler.extract_package_code("RFS-25V471MZ9"), "Z9");
    }

    #[test]
    fn test_replacement_is_reflexive() {
        let handler = ElnaHandler::new();
        assert!(handler.is_official_replacement("RFS-25V471MH3#5", "RFS-25V471MH3#5"));
    }

    #[test]
    fn test_replacement_requires_equal_ratings() {
        let handler = ElnaHandler::new();
        assert!(!handler.is_official_replacement("RFS-25V471MH3", "RFS-50V471MH3"));
        assert!(!handler.is_official_replacement("RFS-25V471MH3", "RFS-25V221MH3"));
        assert!(!handler.is_official_replacement("RFS-25V471MH3", "RFS-25V471MG3"));
    }

    #[test]
    fn test_voltage_notation_does_not_affect_replacement() {
        let handler = ElnaHandler::new();
        // 1E and 25V encode the same rating.
        assert!(handler.is_official_replacement("RFS-1E471MH3", "RFS-25V471MH3"));
    }

    #[test]
    fn test_tier_upgrade_is_one_way() {
        let handler = ElnaHandler::new();
        // Silmic II replaces Silmic at identical ratings and case size.
        assert!(handler.is_official_replacement("RFS-25V471MH3", "RSE-25V471MH3"));
        assert!(!handler.is_official_replacement("RSE-25V471MH3", "RFS-25V471MH3"));
    }

    #[test]
    fn test_cross_series_equivalents_are_mutual() {
        let handler = ElnaHandler::new();
        assert!(handler.is_official_replacement("RE3-16V101MG3", "RJ3-16V101MG3"));
        assert!(handler.is_official_replacement("RJ3-16V101MG3", "RE3-16V101MG3"));
    }

    #[test]
    fn test_unrelated_series_never_replace() {
        let handler = ElnaHandler::new();
        assert!(!handler.is_official_replacement("ROA-25V471MH3", "RFS-25V471MH3"));
    }

    #[test]
    fn test_replacement_empty_inputs() {
        let handler = ElnaHandler::new();
        assert!(!handler.is_official_replacement("", "RFS-25V471MH3"));
        assert!(!handler.is_official_replacement("RFS-25V471MH3", ""));
    }
}
