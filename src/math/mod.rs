//! Numerical utilities: uniform grids and fixed-count quadrature.

pub mod integrate;

pub use integrate::*;
