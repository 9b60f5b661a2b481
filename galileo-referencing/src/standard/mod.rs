//! Hardcoded geodetic definitions, available without any authority database.
//!
//! The tables cover only a handful of widely used EPSG codes. Asking for a code outside of them
//! is a programming error and panics.

mod datum;
mod ellipsoid;

pub use datum::{create_geodetic_datum, prime_meridian, GeodeticDatum, PrimeMeridian};
pub use ellipsoid::{create_ellipsoid, Ellipsoid};

use std::fmt::{Display, Formatter};

/// Authority that defines all the objects of this module.
pub const EPSG: &str = "EPSG";

/// Code given to an object by an authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    /// Name of the authority, e.g. `EPSG`.
    pub authority: String,
    /// Code of the object in the authority's registry.
    pub code: u32,
}

impl Identifier {
    /// Identifier in the EPSG registry.
    pub fn epsg(code: u32) -> Self {
        Self {
            authority: EPSG.to_string(),
            code,
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_display() {
        assert_eq!(Identifier::epsg(7030).to_string(), "EPSG:7030");
    }
}
