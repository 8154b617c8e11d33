//! Material category taxonomy

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The class of nanomaterial an extraction run targets
///
/// The six named classes are the supported taxonomy; `Other` is the
/// explicit default used when a record arrives with an unrecognized
/// category name, instead of a silent string fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    /// Oxide nanomaterials (ZnO, TiO2, Al2O3, ...)
    MetalOxides,

    /// Sulfide nanomaterials (CdS, MoS2, ...)
    MetalSulfides,

    /// Metal-organic frameworks (MOF-5, ZIF-8, ...)
    MetalOrganicFrameworks,

    /// Carbon nanomaterials (CNTs, graphene, carbon dots, ...)
    CarbonBased,

    /// Polymer nanomaterials (polystyrene spheres, nanofibers, ...)
    PolymericNanomaterials,

    /// Elemental metal and alloy nanoparticles (Au, Ag, PtNi, ...)
    PureMetalsAlloys,

    /// Anything outside the supported taxonomy
    Other,
}

impl MaterialCategory {
    /// The six supported material classes, in presentation order
    pub const ALL: [MaterialCategory; 6] = [
        MaterialCategory::MetalOxides,
        MaterialCategory::MetalSulfides,
        MaterialCategory::MetalOrganicFrameworks,
        MaterialCategory::CarbonBased,
        MaterialCategory::PolymericNanomaterials,
        MaterialCategory::PureMetalsAlloys,
    ];

    /// Get the category name as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::MetalOxides => "Metal Oxides",
            MaterialCategory::MetalSulfides => "Metal Sulfides",
            MaterialCategory::MetalOrganicFrameworks => "Metal-Organic Frameworks",
            MaterialCategory::CarbonBased => "Carbon-based",
            MaterialCategory::PolymericNanomaterials => "Polymeric Nanomaterials",
            MaterialCategory::PureMetalsAlloys => "Pure Metals / Alloys",
            MaterialCategory::Other => "Other",
        }
    }

    /// Parse a category from its serialized name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Metal Oxides" => Some(MaterialCategory::MetalOxides),
            "Metal Sulfides" => Some(MaterialCategory::MetalSulfides),
            "Metal-Organic Frameworks" => Some(MaterialCategory::MetalOrganicFrameworks),
            "Carbon-based" => Some(MaterialCategory::CarbonBased),
            "Polymeric Nanomaterials" => Some(MaterialCategory::PolymericNanomaterials),
            "Pure Metals / Alloys" => Some(MaterialCategory::PureMetalsAlloys),
            "Other" => Some(MaterialCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid material category: {}", s))
    }
}

impl Serialize for MaterialCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MaterialCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryVisitor;

        impl Visitor<'_> for CategoryVisitor {
            type Value = MaterialCategory;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a material category name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                // Unrecognized names map to the named default variant
                Ok(MaterialCategory::parse(value).unwrap_or(MaterialCategory::Other))
            }
        }

        deserializer.deserialize_str(CategoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in MaterialCategory::ALL {
            assert_eq!(MaterialCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Quantum Dots".parse::<MaterialCategory>().is_err());
        assert_eq!(
            "Metal Oxides".parse::<MaterialCategory>().unwrap(),
            MaterialCategory::MetalOxides
        );
    }

    #[test]
    fn test_serialize_as_display_name() {
        let json = serde_json::to_string(&MaterialCategory::PureMetalsAlloys).unwrap();
        assert_eq!(json, "\"Pure Metals / Alloys\"");
    }

    #[test]
    fn test_deserialize_unknown_falls_back_to_other() {
        let category: MaterialCategory = serde_json::from_str("\"Wrong\"").unwrap();
        assert_eq!(category, MaterialCategory::Other);

        let category: MaterialCategory = serde_json::from_str("\"Carbon-based\"").unwrap();
        assert_eq!(category, MaterialCategory::CarbonBased);
    }
}
