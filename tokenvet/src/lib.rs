#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

/// The status enumeration and its message rendering.
pub mod status;

pub use status::Status;
