pub mod config;
pub mod plan;
pub mod quadrant;
pub mod sample;
