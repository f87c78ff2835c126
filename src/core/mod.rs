//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the servlet
//! runtime: configuration loading and unified error handling.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
