//! Figure generation.
//!
//! `charts` turns a comparison run into plain chart descriptions; `render`
//! draws them to PNG with plotters. Only `render` touches the filesystem.

pub mod charts;
pub mod render;

pub use charts::*;
pub use render::*;
