//! Command implementations

pub mod verify;
