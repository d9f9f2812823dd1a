//! Node record used during upload node selection.

use std::fmt;

use corelib::node::{NodeId, NodeUrl};
use serde::{Deserialize, Serialize};

/// Information about a storage node that node selection needs.
///
/// A `Node` is a snapshot taken when the record was built. `last_net` and
/// `last_ip_port` are advisory and may be stale; the identity is fixed once
/// the record exists.
///
/// Every field is owned, so `clone()` yields a fully independent record:
/// changing the copy never shows through the original and vice versa. Hand
/// out clones when a record from a shared candidate pool needs to be
/// reordered or annotated.
///
/// # Example
///
/// ```rust
/// use corelib::NodeUrl;
/// use uploadselection::Node;
///
/// let node = Node::new(
///     NodeUrl::new("node-A", "10.0.0.5:7777"),
///     "10.0.0.0/24",
///     "10.0.0.5:7777",
/// );
///
/// let mut copy = node.clone();
/// copy.last_net = "10.0.1.0/24".to_string();
/// assert_eq!(node.last_net, "10.0.0.0/24");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    node_url: NodeUrl,
    /// Network block the node was last seen in. Opaque here; whoever builds
    /// the record decides how it is derived.
    pub last_net: String,
    /// IP and port the node was last seen on. May differ from the address in
    /// the node URL.
    pub last_ip_port: String,
}

impl Node {
    /// Build a record. Nothing is validated; that is up to the producer.
    pub fn new(
        node_url: NodeUrl,
        last_net: impl Into<String>,
        last_ip_port: impl Into<String>,
    ) -> Self {
        Self {
            node_url,
            last_net: last_net.into(),
            last_ip_port: last_ip_port.into(),
        }
    }

    #[inline]
    pub fn node_url(&self) -> &NodeUrl {
        &self.node_url
    }

    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.node_url.id
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.node_url.address
    }

    /// True when both records describe the same node.
    ///
    /// Only the identity is compared; `==` also compares the last-seen
    /// placement.
    pub fn is_same_node(&self, other: &Node) -> bool {
        self.node_url == other.node_url
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (last_net: {}, last_ip_port: {})",
            self.node_url, self.last_net, self.last_ip_port
        )
    }
}
