//! Core types for frame-usage
//!
//! Domain types shared across all other crates: the per-request statistics
//! record, the storage categories tracked by a hub, the URL token codec and
//! process configuration.

pub mod codec;
mod config;
mod constants;
mod env_config;
mod error;
mod stats;
mod store_type;

pub use codec::{decode, encode};
pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use stats::*;
pub use store_type::*;
