pub mod grid;
pub mod location;
pub mod position;

pub use grid::Grid;
pub use location::Location;
pub use position::Position;
