//! Command implementations for dnadiff CLI

pub mod compare;
pub mod records;
