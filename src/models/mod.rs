//! Cosmological observables for the ΛCDM and Enhanced IDT models.
//!
//! Every evaluator is a small, pure function of a redshift (or scale factor)
//! and a parameter record, so the pipeline can map them over any grid.

pub mod eos;
pub mod growth;
pub mod hubble;
pub mod perturbations;

pub use eos::*;
pub use growth::*;
pub use hubble::*;
pub use perturbations::*;
