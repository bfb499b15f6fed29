//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - parameter records (`CosmoParams`, `HiddenRegion`, `EnhancedParams`)
//! - model tags (`ModelKind`, `Model`)
//! - the redshift grid and observational anchors

pub mod types;

pub use types::*;
