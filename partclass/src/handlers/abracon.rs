//! Abracon handler: quartz crystals (ABM/ABLS/ABS) and oscillators
//! (ASE/ASV/ASFL).
//!
//! Abracon ordering codes are hyphen-delimited: series, frequency token,
//! then option codes (load capacitance, stability, packing), e.g.
//! `ABM3-12.000MHZ-B2-T`. The series alone determines the mechanical
//! footprint, so the package code comes from a series lookup table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::decode;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static SERIES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:ABM|ABLS|ABS|ASE|ASV|ASFL)\d{0,2})-").expect("abracon series regex")
});

static FREQUENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-(\d+(?:\.\d+)?[KMG]?HZ)").expect("abracon frequency regex"));

/// Series to body size, from the Abracon crystal/oscillator catalog.
const PACKAGES: &[(&str, &str)] = &[
    ("ABM3", "5.0 x 3.2 mm"),
    ("ABM7", "6.0 x 3.5 mm"),
    ("ABM8", "3.2 x 2.5 mm"),
    ("ABM10", "2.5 x 2.0 mm"),
    ("ABM11", "2.0 x 1.6 mm"),
    ("ABLS", "HC-49/US"),
    ("ABS07", "3.2 x 1.5 mm"),
    ("ASE", "3.2 x 2.5 mm"),
    ("ASV", "7.0 x 5.0 mm"),
    ("ASFL", "5.0 x 3.2 mm"),
];

/// Packing-only suffixes that never affect substitutability.
const PACKING_CODES: &[&str] = &["T", "T3", "TR", "CT"];

pub struct AbraconHandler;

impl AbraconHandler {
    pub fn new() -> Self {
        Self
    }

    /// Nominal frequency encoded in the ordering code, in Hz.
    pub fn extract_frequency_hz(&self, mpn: &str) -> Option<f64> {
        let mpn = normalize(mpn);
        let token = FREQUENCY_RE.captures(&mpn)?.get(1)?.as_str().to_string();
        decode::frequency_hz(&token)
    }

    /// Option codes after the frequency token, packing suffix stripped.
    fn option_codes(&self, mpn: &str) -> Vec<String> {
        let mpn = normalize(mpn);
        let frequency_end = match FREQUENCY_RE.find(&mpn) {
            Some(m) => m.end(),
            None => return Vec::new(),
        };
        mpn[frequency_end..]
            .split('-')
            .filter(|token| !token.is_empty())
            .filter(|token| !PACKING_CODES.contains(token))
            .map(|token| token.to_string())
            .collect()
    }
}

impl Default for AbraconHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for AbraconHandler {
    fn name(&self) -> &'static str {
        "abracon"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        let crystal_patterns = [r"^ABM\d{1,2}[A-Z]*-", r"^ABLS\d?[A-Z]*-", r"^ABS\d{1,2}-"];
        for pattern in crystal_patterns {
            registry.register(ComponentType::Crystal, self.name(), pattern)?;
            registry.register(ComponentType::CrystalAbracon, self.name(), pattern)?;
        }

        let oscillator_patterns = [r"^ASE-", r"^ASV-", r"^ASFL\d?-"];
        for pattern in oscillator_patterns {
            registry.register(ComponentType::Oscillator, self.name(), pattern)?;
        }
        Ok(())
    }

    fn extract_series(&self, mpn: &str) -> String {
        let mpn = normalize(mpn);
        SERIES_RE
            .captures(&mpn)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        let series = self.extract_series(mpn);
        if series.is_empty() {
            return String::new();
        }
        lookup_or_raw(PACKAGES, &series)
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let candidate_series = self.extract_series(candidate);
        let original_series = self.extract_series(original);
        if candidate_series.is_empty() || candidate_series != original_series {
            return false;
        }
        // Package follows the series, so the footprint check is implied.

        if self.extract_frequency_hz(candidate) != self.extract_frequency_hz(original) {
            return false;
        }

        // Load capacitance / stability options must agree when both ordering
        // codes spell them out; a short code without options is compatible
        // with any option set of the same series and frequency.
        let candidate_options = self.option_codes(candidate);
        let original_options = self.option_codes(original);
        candidate_options == original_options
            || candidate_options.is_empty()
            || original_options.is_empty()
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[
            ComponentType::Crystal,
            ComponentType::CrystalAbracon,
            ComponentType::Oscillator,
        ]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::CrystalAbracon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_series() {
        let handler = AbraconHandler::new();
        assert_eq!(handler.extract_series("ABM3-12.000MHZ-B2-T"), "ABM3");
        assert_eq!(handler.extract_series("abls-25.000mhz-b2-t"), "ABLS");
        assert_eq!(handler.extract_series("ASE-12.000MHZ-LC-T"), "ASE");
        assert_eq!(handler.extract_series(""), "");
        assert_eq!(handler.extract_series("GRM188R71C104KA01D"), "");
    }

    #[test]
    fn test_extract_package_code() {
        let handler = AbraconHandler::new();
        assert_eq!(handler.extract_package_code("ABM3-12.000MHZ-B2-T"), "5.0 x 3.2 mm");
        assert_eq!(handler.extract_package_code("ABLS-25.000MHZ-B2-T"), "HC-49/US");
        assert_eq!(handler.extract_package_code(""), "");
        // Unknown series falls back to the raw token.
        assert_eq!(handler.extract_package_code("ABM99-8.000MHZ-T"), "ABM99");
    }

    #[test]
    fn test_extract_frequency() {
        let handler = AbraconHandler::new();
        assert_eq!(
            handler.extract_frequency_hz("ABM3-12.000MHZ-B2-T"),
            Some(12_000_000.0)
        );
        assert_eq!(
            handler.extract_frequency_hz("ABS07-32.768KHZ-T"),
            Some(32_768.0)
        );
        assert_eq!(handler.extract_frequency_hz("ABM3"), None);
    }

    #[test]
    fn test_replacement_is_reflexive() {
        let handler = AbraconHandler::new();
        assert!(handler.is_official_replacement("ABM3-12.000MHZ", "ABM3-12.000MHZ"));
        assert!(handler.is_official_replacement("ABM3-12.000MHZ-B2-T", "ABM3-12.000MHZ-B2-T"));
    }

    #[test]
    fn test_replacement_requires_same_frequency() {
        let handler = AbraconHandler::new();
        assert!(!handler.is_official_replacement("ABM3-12.000MHZ-B2-T", "ABM3-16.000MHZ-B2-T"));
    }

    #[test]
    fn test_replacement_requires_same_series() {
        let handler = AbraconHandler::new();
        assert!(!handler.is_official_replacement("ABM3-12.000MHZ-B2-T", "ABM8-12.000MHZ-B2-T"));
    }

    #[test]
    fn test_replacement_option_tolerance() {
        let handler = AbraconHandler::new();
        // A short ordering code is compatible with a fully specified one.
        assert!(handler.is_official_replacement("ABM3-12.000MHZ", "ABM3-12.000MHZ-B2-T"));
        // Differing load-capacitance options disqualify.
        assert!(!handler.is_official_replacement("ABM3-12.000MHZ-B2-T", "ABM3-12.000MHZ-D2Y-T"));
        // Packing suffix alone never disqualifies.
        assert!(handler.is_official_replacement("ABM3-12.000MHZ-B2-T", "ABM3-12.000MHZ-B2"));
    }

    #[test]
    fn test_replacement_empty_inputs() {
        let handler = AbraconHandler::new();
        assert!(!handler.is_official_replacement("", "ABM3-12.000MHZ"));
        assert!(!handler.is_official_replacement("ABM3-12.000MHZ", ""));
        assert!(!handler.is_official_replacement("", ""));
    }
}
