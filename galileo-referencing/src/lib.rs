//! Algebra of coordinate reference systems: matrices, coordinate transforms and axis directions.
//!
//! # Quick start
//!
//! Transforms are created from matrices in homogeneous coordinates and chained together:
//!
//! ```
//! use galileo_referencing::matrix::Matrix;
//! use galileo_referencing::transform::{self, MathTransform};
//!
//! let swap = Matrix::from_rows(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])?;
//! let swap = transform::linear(&swap)?;
//! let shift = transform::translation(&[10.0, 0.0])?;
//!
//! let chain = transform::concatenate(&swap, &shift)?;
//! assert_eq!(chain.transform_2d(1.0, 2.0)?, (12.0, 1.0));
//! assert_eq!(chain.steps().len(), 2);
//!
//! let back = chain.inverse()?;
//! assert_eq!(back.transform_2d(12.0, 1.0)?, (1.0, 2.0));
//! # Ok::<(), galileo_referencing::error::ReferencingError>(())
//! ```
//!
//! Axis directions are looked up by name, including the EPSG polar axis names:
//!
//! ```
//! use galileo_referencing::axis::{self, AxisDirection, DirectionAlongMeridian};
//!
//! assert_eq!(axis::value_of("NE"), Some(AxisDirection::NorthEast));
//! assert_eq!(axis::opposite(&AxisDirection::Up), AxisDirection::Down);
//!
//! let polar = DirectionAlongMeridian::parse("South along 90 deg East").unwrap();
//! assert_eq!(polar.to_string(), "South along 90°E");
//! ```
//!
//! # Features
//!
//! * `serde` (enabled by default): serialization of matrices, directions and the standard
//!   geodetic definitions.

pub mod axis;
pub mod error;
pub mod matrix;
pub mod standard;
pub mod transform;

pub use axis::{AxisDirection, DirectionAlongMeridian};
pub use error::{ReferencingError, Result};
pub use matrix::{Matrix, MatrixBuilder};
pub use transform::{MathTransform, Transform};
