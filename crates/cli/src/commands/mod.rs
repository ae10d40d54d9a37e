//! Command implementations.

pub mod init;
pub mod race;
pub mod show;
pub mod stats;
pub mod validate;
