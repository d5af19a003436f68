pub mod clut;
pub mod matcher;

pub use clut::{CLUT_1BIT, CLUT_4BIT, CLUT_8BIT};
pub use matcher::{nearest_index, DistanceMetric};
