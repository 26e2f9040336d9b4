pub mod application;
pub mod ports;
