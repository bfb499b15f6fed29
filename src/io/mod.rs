//! Input/output helpers.
//!
//! - parameter file loading (`params`)
//! - per-redshift CSV export (`export`)
//! - comparison JSON read/write (`comparison`)

pub mod comparison;
pub mod export;
pub mod params;

pub use comparison::*;
pub use export::*;
pub use params::*;
