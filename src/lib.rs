pub mod config;
pub mod frame;
pub mod gui;
pub mod interaction;
pub mod math;
pub mod model;
