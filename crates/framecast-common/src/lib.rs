//! Common utilities for the Framecast converter.
//!
//! This crate provides shared infrastructure used by all conversion stages:
//! - **Warning System** - deduplicated, colored stderr diagnostics for
//!   declarations the converter has to ignore

pub mod warning;
