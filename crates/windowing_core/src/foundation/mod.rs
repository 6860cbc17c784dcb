//! Foundation module - Core utilities and types
//!
//! This module provides small utilities used by the rest of the crate:
//! - Frame timing
//! - Logging initialisation

pub mod logging;
pub mod time;
