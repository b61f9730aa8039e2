//! Library for `gangnam-apt`
//! Contains the calculator core and configuration shared by the CLI and tests

pub mod config;
pub mod core;

pub use crate::core::get_version;
