// Coordinate and geometry primitives for drawn shapes.
// `Coordinates` is a latitude/longitude pair, the geometries wrap ordered lists of them
// and share validation, measurement and GeoJSON conversion through `GeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod point;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use point::*;
pub use ring::*;
pub use traits::*;
