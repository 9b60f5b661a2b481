use crate::standard::{create_ellipsoid, Ellipsoid, Identifier};

/// Origin of longitudes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeMeridian {
    identifier: Identifier,
    name: String,
    greenwich_longitude: f64,
}

impl PrimeMeridian {
    /// EPSG code of the prime meridian.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Name of the prime meridian.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Longitude in degrees, relative to Greenwich.
    pub fn greenwich_longitude(&self) -> f64 {
        self.greenwich_longitude
    }
}

/// The Greenwich prime meridian (EPSG:8901).
pub fn prime_meridian() -> PrimeMeridian {
    PrimeMeridian {
        identifier: Identifier::epsg(8901),
        name: "Greenwich".to_string(),
        greenwich_longitude: 0.0,
    }
}

/// Geodetic datum: an ellipsoid positioned relative to the Earth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticDatum {
    identifier: Identifier,
    name: String,
    ellipsoid: Ellipsoid,
    prime_meridian: PrimeMeridian,
}

impl GeodeticDatum {
    /// EPSG code of the datum.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Name of the datum.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference ellipsoid.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Origin of longitudes.
    pub fn prime_meridian(&self) -> &PrimeMeridian {
        &self.prime_meridian
    }
}

impl Default for GeodeticDatum {
    fn default() -> Self {
        create_geodetic_datum(6326)
    }
}

/// Creates the geodetic datum with the given EPSG code.
///
/// Known codes: 6326 (WGS 84), 6322 (WGS 72), 6269 (NAD83), 6267 (NAD27), 6258 (ETRS89),
/// 6230 (ED50) and 6047 (GRS 1980 Authalic Sphere). All use the Greenwich prime meridian.
///
/// # Panics
///
/// Panics if `code` is not one of the known codes.
pub fn create_geodetic_datum(code: u32) -> GeodeticDatum {
    let (name, ellipsoid) = match code {
        6326 => ("World Geodetic System 1984", 7030),
        6322 => ("World Geodetic System 1972", 7043),
        6269 => ("North American Datum 1983", 7019),
        6267 => ("North American Datum 1927", 7008),
        6258 => ("European Terrestrial Reference System 1989", 7019),
        6230 => ("European Datum 1950", 7022),
        6047 => ("Not specified (based on GRS 1980 Authalic Sphere)", 7048),
        _ => panic!("no hardcoded definition for datum EPSG:{code}"),
    };

    GeodeticDatum {
        identifier: Identifier::epsg(code),
        name: name.to_string(),
        ellipsoid: create_ellipsoid(ellipsoid),
        prime_meridian: prime_meridian(),
    }
}
