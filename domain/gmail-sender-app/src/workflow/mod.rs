pub mod params;
pub mod send;
