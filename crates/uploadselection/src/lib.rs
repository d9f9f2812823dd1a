//! Node records for upload-time node selection.
//!
//! A selector picks a diverse set of storage nodes to receive the pieces of
//! an upload. This crate defines the record that selector works over:
//! - The node's identity (`corelib::NodeUrl`)
//! - Its last-known network block, used to keep pieces off shared subnets
//! - Its last-known IP and port
//!
//! The selection policy itself lives with the caller.

pub mod node;

pub use node::Node;
