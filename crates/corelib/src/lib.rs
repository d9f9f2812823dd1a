//! Core library for node identity.
//!
//! This crate provides the primitives every node-selection component shares:
//! - `NodeId`, an opaque node identifier
//! - `NodeUrl`, a node identifier paired with a reachable address
//! - `NodeUrls`, an ordered list of node URLs
//! - The crate error type

pub mod error;
pub mod node;

pub use error::{Error, Result};
pub use node::{NodeId, NodeUrl, NodeUrls};
