//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod add;
pub mod resync;
pub mod show;
