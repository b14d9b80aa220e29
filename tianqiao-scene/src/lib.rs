#![warn(
    clippy::unwrap_used,
    clippy::cast_lossless,
    clippy::unimplemented,
    clippy::indexing_slicing,
    clippy::expect_used
)]

//! Data and geometry core for the tianqiao globe: the city graph, the
//! fixed-radius spherical projection, and arc path sampling. Rendering lives
//! in `tianqiao-renderer`; nothing here touches the scene graph.

pub mod arc;
pub mod coord;
pub mod dataset;
pub mod graph;
pub mod intersect;
pub mod math;
pub mod projection;

pub use arc::*;
pub use coord::*;
pub use dataset::*;
pub use graph::*;
pub use intersect::*;
pub use projection::*;
