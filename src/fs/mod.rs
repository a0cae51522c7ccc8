//! Filesystem helpers.
//!
//! Generated env files and README copies are replaced in one step so a crash
//! never leaves a half-written destination behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
