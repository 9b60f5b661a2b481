use crate::error::ParseDirectionError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Number of directions known by the crate. User-defined directions come after them.
pub const STANDARD_COUNT: usize = 36;

macro_rules! axis_directions {
    ($(
        $(#[$meta:meta])* $variant:ident = $ordinal:literal, $name:literal, $identifier:literal;
    )*) => {
        /// Orientation of a coordinate system axis.
        ///
        /// Directions are ordered by their [ordinal](AxisDirection::ordinal). The order is
        /// significant: of two opposite directions, the one with the smaller ordinal is the
        /// "positive" one (see [`absolute`](crate::axis::absolute)).
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AxisDirection {
            $($(#[$meta])* $variant,)*
            /// Direction not in the standard set, identified by its canonical name. Such
            /// directions are created for example by the
            /// [`direction`](crate::axis::DirectionAlongMeridian::direction) of a
            /// `DirectionAlongMeridian`.
            Custom(Arc<str>),
        }

        static VALUES: [AxisDirection; STANDARD_COUNT] = [$(AxisDirection::$variant,)*];

        impl AxisDirection {
            /// Position of the direction in the standard set. All user-defined directions have
            /// the ordinal [`STANDARD_COUNT`].
            pub fn ordinal(&self) -> usize {
                match self {
                    $(AxisDirection::$variant => $ordinal,)*
                    AxisDirection::Custom(_) => STANDARD_COUNT,
                }
            }

            /// Canonical name, e.g. `NORTH_EAST`.
            pub fn name(&self) -> &str {
                match self {
                    $(AxisDirection::$variant => $name,)*
                    AxisDirection::Custom(name) => name,
                }
            }

            /// Camel case identifier, e.g. `northEast`.
            pub fn identifier(&self) -> &str {
                match self {
                    $(AxisDirection::$variant => $identifier,)*
                    AxisDirection::Custom(name) => name,
                }
            }
        }
    };
}

axis_directions! {
    /// Unknown or unspecified direction.
    Other = 0, "OTHER", "other";
    /// Towards the north.
    North = 1, "NORTH", "north";
    /// Approximately north-north-east.
    NorthNorthEast = 2, "NORTH_NORTH_EAST", "northNorthEast";
    /// Approximately north-east.
    NorthEast = 3, "NORTH_EAST", "northEast";
    /// Approximately east-north-east.
    EastNorthEast = 4, "EAST_NORTH_EAST", "eastNorthEast";
    /// 90° clockwise from north.
    East = 5, "EAST", "east";
    /// Approximately east-south-east.
    EastSouthEast = 6, "EAST_SOUTH_EAST", "eastSouthEast";
    /// Approximately south-east.
    SouthEast = 7, "SOUTH_EAST", "southEast";
    /// Approximately south-south-east.
    SouthSouthEast = 8, "SOUTH_SOUTH_EAST", "southSouthEast";
    /// Towards the south.
    South = 9, "SOUTH", "south";
    /// Approximately south-south-west.
    SouthSouthWest = 10, "SOUTH_SOUTH_WEST", "southSouthWest";
    /// Approximately south-west.
    SouthWest = 11, "SOUTH_WEST", "southWest";
    /// Approximately west-south-west.
    WestSouthWest = 12, "WEST_SOUTH_WEST", "westSouthWest";
    /// 90° clockwise from south.
    West = 13, "WEST", "west";
    /// Approximately west-north-west.
    WestNorthWest = 14, "WEST_NORTH_WEST", "westNorthWest";
    /// Approximately north-west.
    NorthWest = 15, "NORTH_WEST", "northWest";
    /// Approximately north-north-west.
    NorthNorthWest = 16, "NORTH_NORTH_WEST", "northNorthWest";
    /// Up relative to the gravity field.
    Up = 17, "UP", "up";
    /// Down relative to the gravity field.
    Down = 18, "DOWN", "down";
    /// From the geocentre towards the intersection of the equator and the prime meridian.
    GeocentricX = 19, "GEOCENTRIC_X", "geocentricX";
    /// From the geocentre towards the intersection of the equator and the meridian 90°E.
    GeocentricY = 20, "GEOCENTRIC_Y", "geocentricY";
    /// From the geocentre towards the north pole.
    GeocentricZ = 21, "GEOCENTRIC_Z", "geocentricZ";
    /// Towards the future.
    Future = 22, "FUTURE", "future";
    /// Towards the past.
    Past = 23, "PAST", "past";
    /// Increasing column index of a grid.
    ColumnPositive = 24, "COLUMN_POSITIVE", "columnPositive";
    /// Decreasing column index of a grid.
    ColumnNegative = 25, "COLUMN_NEGATIVE", "columnNegative";
    /// Increasing row index of a grid.
    RowPositive = 26, "ROW_POSITIVE", "rowPositive";
    /// Decreasing row index of a grid.
    RowNegative = 27, "ROW_NEGATIVE", "rowNegative";
    /// Towards the right of a display.
    DisplayRight = 28, "DISPLAY_RIGHT", "displayRight";
    /// Towards the left of a display.
    DisplayLeft = 29, "DISPLAY_LEFT", "displayLeft";
    /// Towards the top of a display.
    DisplayUp = 30, "DISPLAY_UP", "displayUp";
    /// Towards the bottom of a display.
    DisplayDown = 31, "DISPLAY_DOWN", "displayDown";
    /// Away from the origin.
    AwayFrom = 32, "AWAY_FROM", "awayFrom";
    /// Towards the origin.
    Towards = 33, "TOWARDS", "towards";
    /// Counter-clockwise rotation.
    CounterClockwise = 34, "COUNTER_CLOCKWISE", "counterClockwise";
    /// Clockwise rotation.
    Clockwise = 35, "CLOCKWISE", "clockwise";
}

impl AxisDirection {
    /// All standard directions in ordinal order.
    pub fn values() -> &'static [AxisDirection] {
        &VALUES
    }

    /// Standard direction with the given ordinal.
    pub fn from_ordinal(ordinal: usize) -> Option<&'static AxisDirection> {
        VALUES.get(ordinal)
    }

    /// User-defined direction with the given name.
    pub fn custom(name: &str) -> Self {
        Self::Custom(name.into())
    }
}

impl Display for AxisDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisDirection {
    type Err = ParseDirectionError;

    /// Looks the name up with [`value_of`](crate::axis::value_of). User-defined directions are
    /// not created by this method, use [`AxisDirection::custom`] for them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::axis::value_of(s).ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AxisDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AxisDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(crate::axis::value_of(&name).unwrap_or_else(|| AxisDirection::custom(&name)))
    }
}
