//! # IronNIMO Bench
//!
//! Fixtures and measurement utilities for IronNIMO performance testing.

pub mod fixtures;
pub mod latency;
