pub mod concave;
pub mod convex;
pub mod errors;
pub mod geometry;
#[cfg(feature = "setup_tracing")]
mod logging;
pub mod polygon;
pub mod predicates;
pub mod rtree;

pub use concave::{concaveman, Options};
pub use convex::{convex_hull, fast_convex_hull};
pub use geometry::{Point, Rect};
pub use polygon::{point_in_polygon, point_in_polygon_offset};
pub use predicates::orient2d;
pub use rtree::{RTree, Spatial};
