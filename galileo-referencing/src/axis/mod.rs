//! Axis directions of coordinate systems.
//!
//! [`AxisDirection`] enumerates the standard directions and carries user-defined ones by name.
//! The free functions of this module relate directions to each other (opposites, compass angles)
//! and look them up by name. [`DirectionAlongMeridian`] parses the polar axis names used by EPSG,
//! like `South along 90°E`.

mod along_meridian;
mod direction;
mod directions;

pub use along_meridian::DirectionAlongMeridian;
pub use direction::{AxisDirection, STANDARD_COUNT};
pub use directions::{
    absolute, angle_for_compass, find, index_of, is_cardinal, is_compass, is_display, is_grid,
    is_intercardinal, is_opposite, is_spatial_or_custom, is_temporal, is_vertical, opposite,
    value_of,
};
