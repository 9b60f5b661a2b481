use crate::axis::direction::AxisDirection;
use crate::axis::directions::{find, value_of};
use crate::error::ParseDirectionError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{LazyLock, OnceLock};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\S+)\s+along\s+([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*(?:deg|°)?\s*(\S+)?\s*$")
        .expect("direction along meridian pattern is valid")
});

/// Direction towards north or south along a given meridian, like `South along 90°E`.
///
/// Such directions are used by the axes of polar stereographic projections.
#[derive(Debug, Clone)]
pub struct DirectionAlongMeridian {
    base_direction: AxisDirection,
    meridian: f64,
    direction: OnceLock<AxisDirection>,
}

impl DirectionAlongMeridian {
    /// Creates a new direction. Returns `None` unless `base_direction` is `NORTH` or `SOUTH` and
    /// `meridian` is in the `[-180, 180]` range.
    ///
    /// The meridian `-180°` is stored as `180°`.
    pub fn new(base_direction: AxisDirection, meridian: f64) -> Option<Self> {
        if !matches!(base_direction, AxisDirection::North | AxisDirection::South)
            || !(-180.0..=180.0).contains(&meridian)
        {
            return None;
        }

        let meridian = if meridian == -180.0 {
            180.0
        } else {
            meridian + 0.0
        };
        Some(Self {
            base_direction,
            meridian,
            direction: OnceLock::new(),
        })
    }

    /// Parses names like `North along 90 deg East` or `South along 45°W`.
    ///
    /// Returns `None` if the name does not have this form, if the base direction is not north or
    /// south, if the sign word is neither east nor west, or if the meridian is out of range.
    pub fn parse(name: &str) -> Option<Self> {
        let captures = PATTERN.captures(name)?;
        let base_direction = find(
            captures.get(1)?.as_str(),
            &[AxisDirection::North, AxisDirection::South],
        )?;

        let mut meridian: f64 = captures.get(2)?.as_str().parse().ok()?;
        if !(-180.0..=180.0).contains(&meridian) {
            return None;
        }

        if let Some(sign) = captures.get(3) {
            let sign = find(sign.as_str(), &[AxisDirection::East, AxisDirection::West])?;
            if sign == AxisDirection::West {
                meridian = -meridian;
            }
        }

        Self::new(base_direction, meridian)
    }

    /// `NORTH` or `SOUTH`.
    pub fn base_direction(&self) -> &AxisDirection {
        &self.base_direction
    }

    /// Meridian in degrees, positive east of Greenwich.
    pub fn meridian(&self) -> f64 {
        self.meridian
    }

    /// Axis direction with the name of this direction. The value is computed on the first call.
    pub fn direction(&self) -> &AxisDirection {
        self.direction.get_or_init(|| {
            let name = self.to_string();
            value_of(&name).unwrap_or_else(|| AxisDirection::custom(&name))
        })
    }

    /// Angle in degrees from `other` to `self`. A positive angle denotes a right-handed rotation.
    /// Returns NaN if the base directions differ.
    ///
    /// The meridian difference is normalized to `(-180, 180]` before the sign is inverted for
    /// south directions, so the result is in `[-180, 180]`: antipodal meridians give `180` along
    /// north and `-180` along south, whatever the argument order.
    pub fn angle(&self, other: &DirectionAlongMeridian) -> f64 {
        if self.base_direction != other.base_direction {
            return f64::NAN;
        }

        let mut angle = self.meridian - other.meridian;
        if angle <= -180.0 {
            angle += 360.0;
        } else if angle > 180.0 {
            angle -= 360.0;
        }

        if self.base_direction == AxisDirection::South {
            angle = -angle;
        }

        angle
    }

    /// Compares two directions the way EPSG orders the axes of polar coordinate systems: first
    /// by base direction, then by angle with the sign inverted, so that `North along 90°E`
    /// comes before `North along 0°`.
    ///
    /// Meridians are compared on a circle, so the ordering is only consistent for directions
    /// spanning less than half a turn. For this reason the type does not implement [`Ord`].
    /// Antipodal meridians are not antisymmetric either: both `a.compare(&b)` and `b.compare(&a)`
    /// return [`Ordering::Less`] along north and [`Ordering::Greater`] along south.
    pub fn compare(&self, other: &DirectionAlongMeridian) -> Ordering {
        let by_base = self
            .base_direction
            .ordinal()
            .cmp(&other.base_direction.ordinal());
        if by_base != Ordering::Equal {
            return by_base;
        }

        let angle = self.angle(other);
        if angle < 0.0 {
            Ordering::Greater
        } else if angle > 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl PartialEq for DirectionAlongMeridian {
    fn eq(&self, other: &Self) -> bool {
        self.base_direction == other.base_direction
            && self.meridian.to_bits() == other.meridian.to_bits()
    }
}

impl Eq for DirectionAlongMeridian {}

impl Hash for DirectionAlongMeridian {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base_direction.hash(state);
        self.meridian.to_bits().hash(state);
    }
}

impl Display for DirectionAlongMeridian {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let base = match self.base_direction {
            AxisDirection::South => "South",
            _ => "North",
        };
        let magnitude = self.meridian.abs();
        write!(f, "{base} along {magnitude}°")?;
        if magnitude != 0.0 {
            f.write_str(if self.meridian < 0.0 { "W" } else { "E" })?;
        }

        Ok(())
    }
}

impl FromStr for DirectionAlongMeridian {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DirectionAlongMeridian {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DirectionAlongMeridian {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
