//! Trellis Core
//!
//! This crate contains the shared building blocks of the Trellis widget toolkit:
//! geometry primitives, collection aliases, logging bootstrap, profiling hooks
//! and the layout engine configuration.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
