pub mod canvas;
pub mod core;
pub mod features;
pub mod mlaas;
pub mod persistence;
pub mod templates;
pub mod tutorial;
