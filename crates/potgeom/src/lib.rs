mod geometry;
mod pot;
mod units;

pub use geometry::*;
pub use pot::*;
pub use units::*;
