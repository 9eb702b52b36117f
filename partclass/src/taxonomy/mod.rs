//! Component Type Taxonomy
//!
//! A closed, two-tier set of category tags. Generic tags (`Capacitor`,
//! `Crystal`, ...) describe what a part *is*; manufacturer-qualified tags
//! (`CrystalAbracon`, `TvsDiodeLittelfuse`, ...) additionally pin down who
//! made it. A part that matches a qualified tag always matches the generic
//! parent as well - handlers register every qualified pattern under both
//! tags, and `parent()` exposes the link.
//!
//! The set is fixed at compile time. There is no runtime registration of
//! new tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category tag for an electronic component.
///
/// Note: variant names follow electronics terminology (TVS, MOSFET) rather
/// than strict camel-case words, matching how these categories are written
/// in datasheets and BOMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    // Generic categories
    Capacitor,
    Resistor,
    Inductor,
    Diode,
    TvsDiode,
    Mosfet,
    Ic,
    Sensor,
    Crystal,
    Oscillator,
    Fuse,
    Led,
    Connector,

    // Manufacturer-qualified specializations
    CrystalAbracon,
    CrystalKds,
    CapacitorElna,
    SensorAkm,
    TvsDiodeLittelfuse,
    IcAsmedia,
}

impl ComponentType {
    /// The full, closed tag set.
    pub const ALL: &'static [ComponentType] = &[
        ComponentType::Capacitor,
        ComponentType::Resistor,
        ComponentType::Inductor,
        ComponentType::Diode,
        ComponentType::TvsDiode,
        ComponentType::Mosfet,
        ComponentType::Ic,
        ComponentType::Sensor,
        ComponentType::Crystal,
        ComponentType::Oscillator,
        ComponentType::Fuse,
        ComponentType::Led,
        ComponentType::Connector,
        ComponentType::CrystalAbracon,
        ComponentType::CrystalKds,
        ComponentType::CapacitorElna,
        ComponentType::SensorAkm,
        ComponentType::TvsDiodeLittelfuse,
        ComponentType::IcAsmedia,
    ];

    /// Generic parent of a manufacturer-qualified tag.
    ///
    /// Returns `None` for generic tags.
    pub fn parent(&self) -> Option<ComponentType> {
        match self {
            ComponentType::CrystalAbracon => Some(ComponentType::Crystal),
            ComponentType::CrystalKds => Some(ComponentType::Crystal),
            ComponentType::CapacitorElna => Some(ComponentType::Capacitor),
            ComponentType::SensorAkm => Some(ComponentType::Sensor),
            ComponentType::TvsDiodeLittelfuse => Some(ComponentType::TvsDiode),
            ComponentType::IcAsmedia => Some(ComponentType::Ic),
            _ => None,
        }
    }

    /// True for manufacturer-qualified tags.
    pub fn is_manufacturer_specific(&self) -> bool {
        self.parent().is_some()
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Capacitor => "capacitor",
            ComponentType::Resistor => "resistor",
            ComponentType::Inductor => "inductor",
            ComponentType::Diode => "diode",
            ComponentType::TvsDiode => "tvs_diode",
            ComponentType::Mosfet => "mosfet",
            ComponentType::Ic => "ic",
            ComponentType::Sensor => "sensor",
            ComponentType::Crystal => "crystal",
            ComponentType::Oscillator => "oscillator",
            ComponentType::Fuse => "fuse",
            ComponentType::Led => "led",
            ComponentType::Connector => "connector",
            ComponentType::CrystalAbracon => "crystal_abracon",
            ComponentType::CrystalKds => "crystal_kds",
            ComponentType::CapacitorElna => "capacitor_elna",
            ComponentType::SensorAkm => "sensor_akm",
            ComponentType::TvsDiodeLittelfuse => "tvs_diode_littelfuse",
            ComponentType::IcAsmedia => "ic_asmedia",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComponentType(pub String);

impl fmt::Display for UnknownComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component type: {}", self.0)
    }
}

impl std::error::Error for UnknownComponentType {}

impl FromStr for ComponentType {
    type Err = UnknownComponentType;

    /// Case-insensitive parse of the snake_case tag name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ComponentType::ALL
            .iter()
            .find(|t| t.as_str() == lowered)
            .copied()
            .ok_or_else(|| UnknownComponentType(s.to_string()))
    }
}
