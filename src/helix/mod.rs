pub mod geometry;
pub mod model;

pub use geometry::*;
pub use model::*;
