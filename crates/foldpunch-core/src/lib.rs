//! # foldpunch core
//!
//! Geometry, shape registry and the fold resolver.
//!
//! A sheet is described as a list of shapes. Rectangles and circles are the
//! physical layers; a fold creases an earlier shape along a line. Queries
//! ask how many layers a punch at a given point on a given shape goes
//! through, which is answered by undoing the folds one crease at a time.

pub mod error;
pub mod geometry;
pub mod query;
pub mod registry;
pub mod resolver;
pub mod shapes;

pub use error::{FoldError, FoldResult};
pub use geometry::{approx_eq, approx_le, inside_interval, Line, Point, Sign, EPSILON};
pub use query::{answer, Query, QueryEngine};
pub use registry::{RegistryBuilder, ShapeRegistry};
pub use resolver::{resolve, Resolution, ResolverOptions, Traversal, MAX_RECURSION_DEPTH};
pub use shapes::{Circle, Fold, Rectangle, Shape, ShapeType};
