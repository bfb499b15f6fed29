//! `idt-class` library crate.
//!
//! The binary (`idt`) is a thin wrapper around this library so that:
//!
//! - the numeric pipeline is testable without spawning processes or drawing
//! - plotting and printing stay at the edges

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
