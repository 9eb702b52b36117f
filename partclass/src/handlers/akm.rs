//! Asahi Kasei Microdevices (AKM) handler: magnetic sensors (AK89xx,
//! AK099xx) and audio ICs (AK4xxx/AK5xxx).
//!
//! The family identifier is a fixed-shape prefix slice: `AK` plus the digit
//! run (`AK8963C` -> `AK8963`). The letters after the digits select the
//! package, via a suffix lookup table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static SERIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(AK\d{4,5})([A-Z]{0,2})").expect("akm series regex"));

/// Package suffix letters, per AKM ordering information.
const PACKAGES: &[(&str, &str)] = &[
    ("C", "QFN"),
    ("N", "WLCSP"),
    ("D", "SOP"),
    ("EQ", "TQFP"),
    ("EN", "QFN"),
    ("VN", "TSSOP"),
];

pub struct AkmHandler;

impl AkmHandler {
    pub fn new() -> Self {
        Self
    }

    /// Raw package suffix letters, before table mapping.
    fn package_suffix(&self, mpn: &str) -> String {
        let mpn = normalize(mpn);
        SERIES_RE
            .captures(&mpn)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for AkmHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for AkmHandler {
    fn name(&self) -> &'static str {
        "akm"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        // Magnetometers / compass sensors.
        for pattern in [r"^AK89\d{2}", r"^AK099\d{2}"] {
            registry.register(ComponentType::Sensor, self.name(), pattern)?;
            registry.register(ComponentType::SensorAkm, self.name(), pattern)?;
        }
        // Audio codecs and converters stay on the generic IC tag.
        for pattern in [r"^AK4\d{3}", r"^AK5\d{3}"] {
            registry.register(ComponentType::Ic, self.name(), pattern)?;
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
        if self.extract_series(mpn).is_empty() {
            return String::new();
        }
        let suffix = self.package_suffix(mpn);
        if suffix.is_empty() {
            return String::new();
        }
        lookup_or_raw(PACKAGES, &suffix)
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let candidate_series = self.extract_series(candidate);
        let original_series = self.extract_series(original);
        if candidate_series.is_empty() || candidate_series != original_series {
            return false;
        }
        // Package suffix is load-bearing; a bare family code only matches
        // another bare family code.
        self.package_suffix(candidate) == self.package_suffix(original)
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[
            ComponentType::Sensor,
            ComponentType::SensorAkm,
            ComponentType::Ic,
        ]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::SensorAkm]
    }
}
