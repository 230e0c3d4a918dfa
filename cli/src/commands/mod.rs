//! Command implementations

pub mod config;
pub mod lint;
pub mod vagrant;
pub mod validate;
