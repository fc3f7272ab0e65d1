//! weigher-core: Core types for the resource-aware node weigher
//!
//! This crate provides the types shared by every placement strategy:
//! - Resource requests and node snapshots
//! - Scored candidates
//! - Strategy configuration
//! - Error handling

pub mod config;
pub mod error;
pub mod resources;

pub use config::*;
pub use error::*;
pub use resources::*;
