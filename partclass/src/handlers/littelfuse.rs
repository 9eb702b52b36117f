//! Littelfuse handler: TVS (transient voltage suppression) diodes.
//!
//! Several unrelated prefixes live under one tag: surface-mount SMAJ/SMBJ/
//! SMCJ and axial P6KE/1.5KE all classify as `TvsDiodeLittelfuse`. That
//! makes this the handler that exercises registry completeness - matching
//! must consult every rule for the tag, not just the first one registered.
//!
//! Ordering codes are series + working voltage + directionality suffix:
//! `SMAJ5.0A` (5 V unidirectional, DO-214AC), `SMBJ12CA` (12 V
//! bidirectional, DO-214AA). Voltage and directionality are both
//! load-bearing for replacement; the package follows the series.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static ORDERING_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(SMAJ|SMBJ|SMCJ|P6KE|1\.5KE)(\d+(?:\.\d+)?)(CA|C|A)?$")
        .expect("littelfuse ordering code regex")
});

/// Series prefix to JEDEC package outline.
const PACKAGES: &[(&str, &str)] = &[
    ("SMAJ", "DO-214AC"),
    ("SMBJ", "DO-214AA"),
    ("SMCJ", "DO-214AB"),
    ("P6KE", "DO-15"),
    ("1.5KE", "DO-201AE"),
];

pub struct LittelfuseHandler;

struct TvsCode {
    series: String,
    standoff_v: f64,
    bidirectional: bool,
}

impl LittelfuseHandler {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, mpn: &str) -> Option<TvsCode> {
        let mpn = normalize(mpn);
        let caps = ORDERING_CODE_RE.captures(&mpn)?;
        let series = caps.get(1)?.as_str().to_string();
        let standoff_v = caps.get(2)?.as_str().parse::<f64>().ok()?;
        let bidirectional = caps
            .get(3)
            .map(|m| m.as_str().starts_with('C'))
            .unwrap_or(false);
        Some(TvsCode {
            series,
            standoff_v,
            bidirectional,
        })
    }

    /// Working (stand-off) voltage in volts.
    pub fn extract_standoff_voltage_v(&self, mpn: &str) -> Option<f64> {
        self.parse(mpn).map(|code| code.standoff_v)
    }

    /// True for bidirectional variants (`C`/`CA` suffix).
    pub fn is_bidirectional(&self, mpn: &str) -> bool {
        self.parse(mpn)
            .map(|code| code.bidirectional)
            .unwrap_or(false)
    }
}

impl Default for LittelfuseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for LittelfuseHandler {
    fn name(&self) -> &'static str {
        "littelfuse"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        // Disjoint prefixes, all under the same qualified tag.
        let patterns = [
            r"^SMAJ\d",
            r"^SMBJ\d",
            r"^SMCJ\d",
            r"^P6KE\d",
            r"^1\.5KE\d",
        ];
        for pattern in patterns {
            registry.register(ComponentType::Diode, self.name(), pattern)?;
            registry.register(ComponentType::TvsDiode, self.name(), pattern)?;
            registry.register(ComponentType::TvsDiodeLittelfuse, self.name(), pattern)?;
        }
        Ok(())
    }

    fn extract_series(&self, mpn: &str) -> String {
        self.parse(mpn).map(|code| code.series).unwrap_or_default()
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        let series = self.extract_series(mpn);
        if series.is_empty() {
            return String::new();
        }
        lookup_or_raw(PACKAGES, &series)
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let (candidate, original) = match (self.parse(candidate), self.parse(original)) {
            (Some(c), Some(o)) => (c, o),
            _ => return false,
        };
        candidate.series == original.series
            && candidate.standoff_v == original.standoff_v
            && candidate.bidirectional == original.bidirectional
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[
            ComponentType::Diode,
            ComponentType::TvsDiode,
            ComponentType::TvsDiodeLittelfuse,
        ]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::TvsDiodeLittelfuse]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_series_across_prefixes() {
        let handler = LittelfuseHandler::new();
        assert_eq!(handler.extract_series("SMAJ5.0A"), "SMAJ");
        assert_eq!(handler.extract_series("smbj12ca"), "SMBJ");
        assert_eq!(handler.extract_series("1.5KE15A"), "1.5KE");
        assert_eq!(handler.extract_series("P6KE6.8A"), "P6KE");
        assert_eq!(handler.extract_series(""), "");
        assert_eq!(handler.extract_series("BZX84C5V1"), "");
    }

    #[test]
    fn test_extract_package_code() {
        let handler = LittelfuseHandler::new();
        assert_eq!(handler.extract_package_code("SMAJ5.0A"), "DO-214AC");
        assert_eq!(handler.extract_package_code("SMCJ24CA"), "DO-214AB");
        assert_eq!(handler.extract_package_code("1.5KE15A"), "DO-201AE");
        assert_eq!(handler.extract_package_code(""), "");
    }

    #[test]
    fn test_voltage_and_directionality() {
        let handler = LittelfuseHandler::new();
        assert_eq!(handler.extract_standoff_voltage_v("SMAJ5.0A"), Some(5.0));
        assert_eq!(handler.extract_standoff_voltage_v("SMBJ12CA"), Some(12.0));
        assert!(!handler.is_bidirectional("SMAJ5.0A"));
        assert!(handler.is_bidirectional("SMAJ5.0CA"));
        assert!(handler.is_bidirectional("P6KE6.8C"));
    }

    #[test]
    fn test_replacement_is_reflexive() {
        let handler = LittelfuseHandler::new();
        assert!(handler.is_official_replacement("SMAJ5.0A", "SMAJ5.0A"));
        assert!(handler.is_official_replacement("1.5KE15A", "1.5KE15A"));
    }

    #[test]
    fn test_directionality_is_load_bearing() {
        let handler = LittelfuseHandler::new();
        assert!(!handler.is_official_replacement("SMAJ5.0A", "SMAJ5.0CA"));
        assert!(!handler.is_official_replacement("SMAJ5.0CA", "SMAJ5.0A"));
    }

    #[test]
    fn test_voltage_is_load_bearing() {
        let handler = LittelfuseHandler::new();
        assert!(!handler.is_official_replacement("SMAJ5.0A", "SMAJ12A"));
    }

    #[test]
    fn test_package_family_is_load_bearing() {
        let handler = LittelfuseHandler::new();
        // Same voltage, different outline.
        assert!(!handler.is_official_replacement("SMAJ12A", "SMBJ12A"));
    }

    #[test]
    fn test_replacement_empty_inputs() {
        let handler = LittelfuseHandler::new();
        assert!(!handler.is_official_replacement("", "SMAJ5.0A"));
        assert!(!handler.is_official_replacement("SMAJ5.0A", ""));
    }
}
