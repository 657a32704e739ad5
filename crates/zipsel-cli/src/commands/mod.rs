//! Command implementations.

pub mod create;
pub mod extract;
pub mod matches;
pub mod probe;
