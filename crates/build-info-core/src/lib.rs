//! Record assembly for build-info.
//!
//! This crate builds validated records out of the data types defined in
//! `build-info-types`. It performs no I/O.

pub mod builder;
