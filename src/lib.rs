pub mod coord;
pub mod direction;
pub mod entity;
pub mod scenario;
