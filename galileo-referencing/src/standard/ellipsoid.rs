use crate::standard::Identifier;

/// Reference ellipsoid, defined by its semi-major axis and either its inverse flattening or its
/// semi-minor axis.
///
/// Serialized ellipsoids only store their defining parameter, so spheres survive formats that
/// cannot represent an infinite inverse flattening.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "EllipsoidData", from = "EllipsoidData")
)]
pub struct Ellipsoid {
    identifier: Identifier,
    name: String,
    alias: Option<String>,
    semi_major_axis: f64,
    semi_minor_axis: f64,
    inverse_flattening: f64,
    ivf_definitive: bool,
}

impl Ellipsoid {
    /// Ellipsoid defined by its semi-major axis and inverse flattening. An infinite inverse
    /// flattening gives a sphere.
    pub fn with_inverse_flattening(
        identifier: Identifier,
        name: &str,
        alias: Option<&str>,
        semi_major_axis: f64,
        inverse_flattening: f64,
    ) -> Self {
        let semi_minor_axis = if inverse_flattening.is_infinite() {
            semi_major_axis
        } else {
            semi_major_axis * (1.0 - 1.0 / inverse_flattening)
        };

        Self {
            identifier,
            name: name.to_string(),
            alias: alias.map(str::to_string),
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            ivf_definitive: true,
        }
    }

    /// Ellipsoid defined by its two axes.
    pub fn with_semi_minor_axis(
        identifier: Identifier,
        name: &str,
        alias: Option<&str>,
        semi_major_axis: f64,
        semi_minor_axis: f64,
    ) -> Self {
        let inverse_flattening = if semi_major_axis == semi_minor_axis {
            f64::INFINITY
        } else {
            semi_major_axis / (semi_major_axis - semi_minor_axis)
        };

        Self {
            identifier,
            name: name.to_string(),
            alias: alias.map(str::to_string),
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            ivf_definitive: false,
        }
    }

    /// Sphere of the given radius.
    pub fn sphere(identifier: Identifier, name: &str, alias: Option<&str>, radius: f64) -> Self {
        Self::with_semi_minor_axis(identifier, name, alias, radius, radius)
    }

    /// EPSG code of the ellipsoid.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative name, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Equatorial radius in metres.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Polar radius in metres.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// `a / (a - b)`. Infinite for a sphere.
    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// True if the inverse flattening is the defining parameter, false if the semi-minor axis is.
    pub fn is_ivf_definitive(&self) -> bool {
        self.ivf_definitive
    }

    /// `(a - b) / a`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// Square of the first eccentricity.
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// True if both axes are equal.
    pub fn is_sphere(&self) -> bool {
        self.semi_major_axis == self.semi_minor_axis
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct EllipsoidData {
    identifier: Identifier,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    semi_major_axis: f64,
    definition: Definition,
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum Definition {
    InverseFlattening(f64),
    SemiMinorAxis(f64),
}

#[cfg(feature = "serde")]
impl From<Ellipsoid> for EllipsoidData {
    fn from(e: Ellipsoid) -> Self {
        let definition = if e.ivf_definitive {
            Definition::InverseFlattening(e.inverse_flattening)
        } else {
            Definition::SemiMinorAxis(e.semi_minor_axis)
        };

        Self {
            identifier: e.identifier,
            name: e.name,
            alias: e.alias,
            semi_major_axis: e.semi_major_axis,
            definition,
        }
    }
}

#[cfg(feature = "serde")]
impl From<EllipsoidData> for Ellipsoid {
    fn from(data: EllipsoidData) -> Self {
        let alias = data.alias.as_deref();
        match data.definition {
            Definition::InverseFlattening(ivf) => Ellipsoid::with_inverse_flattening(
                data.identifier,
                &data.name,
                alias,
                data.semi_major_axis,
                ivf,
            ),
            Definition::SemiMinorAxis(b) => Ellipsoid::with_semi_minor_axis(
                data.identifier,
                &data.name,
                alias,
                data.semi_major_axis,
                b,
            ),
        }
    }
}

/// Creates the ellipsoid with the given EPSG code.
///
/// Known codes: 7030 (WGS 84), 7043 (WGS 72), 7019 (GRS 1980), 7022 (International 1924),
/// 7008 (Clarke 1866), 7048 (GRS 1980 Authalic Sphere), 7004 (Bessel 1841) and 7001
/// (Airy 1830).
///
/// # Panics
///
/// Panics if `code` is not one of the known codes.
pub fn create_ellipsoid(code: u32) -> Ellipsoid {
    let id = Identifier::epsg(code);
    match code {
        7030 => Ellipsoid::with_inverse_flattening(
            id,
            "WGS 84",
            Some("WGS84"),
            6_378_137.0,
            298.257_223_563,
        ),
        7043 => {
            Ellipsoid::with_inverse_flattening(id, "WGS 72", Some("NWL 10D"), 6_378_135.0, 298.26)
        }
        7019 => Ellipsoid::with_inverse_flattening(
            id,
            "GRS 1980",
            Some("International 1979"),
            6_378_137.0,
            298.257_222_101,
        ),
        7022 => Ellipsoid::with_inverse_flattening(
            id,
            "International 1924",
            Some("Hayford 1909"),
            6_378_388.0,
            297.0,
        ),
        7008 => Ellipsoid::with_semi_minor_axis(id, "Clarke 1866", None, 6_378_206.4, 6_356_583.8),
        7048 => Ellipsoid::sphere(id, "GRS 1980 Authalic Sphere", None, 6_371_007.0),
        7004 => Ellipsoid::with_inverse_flattening(
            id,
            "Bessel 1841",
            None,
            6_377_397.155,
            299.152_812_8,
        ),
        7001 => Ellipsoid::with_inverse_flattening(
            id,
            "Airy 1830",
            None,
            6_377_563.396,
            299.324_964_6,
        ),
        _ => panic!("no hardcoded definition for ellipsoid {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wgs84() {
        let e = create_ellipsoid(7030);
        assert_eq!(e.name(), "WGS 84");
        assert_eq!(e.alias(), Some("WGS84"));
        assert_eq!(e.identifier(), &Identifier::epsg(7030));
        assert_eq!(e.semi_major_axis(), 6_378_137.0);
        assert_eq!(e.inverse_flattening(), 298.257_223_563);
        assert!(e.is_ivf_definitive());
        assert!(!e.is_sphere());
        assert_relative_eq!(e.semi_minor_axis(), 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(
            e.eccentricity_squared().sqrt(),
            0.081_819_190_842_622,
            epsilon = 1e-12
        );
    }

    #[test]
    fn clarke_1866_is_defined_by_axes() {
        let e = create_ellipsoid(7008);
        assert!(!e.is_ivf_definitive());
        assert_eq!(e.semi_minor_axis(), 6_356_583.8);
        assert_relative_eq!(e.inverse_flattening(), 294.978_698_213_898, epsilon = 1e-9);
    }

    #[test]
    fn authalic_sphere() {
        let e = create_ellipsoid(7048);
        assert!(e.is_sphere());
        assert_eq!(e.semi_minor_axis(), 6_371_007.0);
        assert!(e.inverse_flattening().is_infinite());
        assert_eq!(e.flattening(), 0.0);
        assert_eq!(e.eccentricity_squared(), 0.0);
    }

    #[test]
    fn all_codes_are_defined() {
        for code in [7030, 7043, 7019, 7022, 7008, 7048, 7004, 7001] {
            let e = create_ellipsoid(code);
            assert_eq!(e.identifier().code, code);
            assert!(e.semi_minor_axis() <= e.semi_major_axis());
        }
    }

    #[test]
    #[should_panic(expected = "EPSG:7099")]
    fn unknown_code_panics() {
        create_ellipsoid(7099);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_defining_parameter() {
        let e = create_ellipsoid(7022);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains(r#""name":"International 1924""#));
        assert!(json.contains(r#""identifier":{"authority":"EPSG","code":7022}"#));
        assert!(json.contains(r#""definition":{"inverse_flattening":297.0}"#));
        let back: Ellipsoid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);

        let sphere = create_ellipsoid(7048);
        let json = serde_json::to_string(&sphere).unwrap();
        assert!(!json.contains("alias"));
        assert!(json.contains(r#""definition":{"semi_minor_axis":6371007.0}"#));
        let back: Ellipsoid = serde_json::from_str(&json).unwrap();
        assert!(back.is_sphere());
        assert!(back.inverse_flattening().is_infinite());
    }
}
