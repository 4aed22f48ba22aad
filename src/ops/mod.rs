//! High-level operations.
//!
//! This module contains the wiring a host build tool (or the Gantry CLI)
//! performs over the inference core.

pub mod resolve;

pub use resolve::{resolve_tasks, TaskResolution};
