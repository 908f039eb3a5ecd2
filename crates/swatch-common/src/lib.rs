//! Common utilities for the swatch sampler.
//!
//! This crate provides shared infrastructure used by all swatch components:
//! - **Warning System** - deduplicated warnings for input the sampler can't interpret
//! - **Logging** - one-shot `env_logger` setup for binaries and tests

pub mod logging;
pub mod warning;
