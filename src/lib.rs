//! asciiview library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod ascii;
pub mod buffer;
pub mod cli;
pub mod geometry;
pub mod loader;
pub mod render;
