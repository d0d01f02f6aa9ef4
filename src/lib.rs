pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod family;
pub mod matrix;
pub mod model;

pub use anyhow::Result;
