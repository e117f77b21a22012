//! Filesystem utilities for pairgen.
//!
//! Output files are written atomically so a failed run never leaves a
//! truncated CSV at the target path.

pub mod atomic;

pub use atomic::atomic_write;
