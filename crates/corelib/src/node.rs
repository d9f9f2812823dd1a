//! Node identity.
//!
//! A node is addressed by a `NodeUrl`: an opaque `NodeId` plus the network
//! address the node can be dialed on. The textual form is `id@address`, with
//! an optional `storj://` scheme in front.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SCHEME: &str = "storj://";

/// Opaque identifier for a storage node.
///
/// The identifier is carried as-is; no encoding or checksum is enforced.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// True for the empty identifier.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A node identifier together with the address it is reachable on.
///
/// Two `NodeUrl`s are the same node exactly when both parts match.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeUrl {
    pub id: NodeId,
    /// Dialable address, usually `host:port`.
    pub address: String,
}

impl NodeUrl {
    /// Construct a node URL from its parts. Neither part is validated.
    pub fn new(id: impl Into<NodeId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
        }
    }

    /// True when both the id and the address are empty.
    pub fn is_zero(&self) -> bool {
        self.id.is_zero() && self.address.is_empty()
    }
}

impl fmt::Display for NodeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_zero() {
            f.write_str(&self.address)
        } else {
            write!(f, "{}@{}", self.id, self.address)
        }
    }
}

impl FromStr for NodeUrl {
    type Err = Error;

    /// Parse `[storj://][id@]address`.
    ///
    /// # Example
    /// ```rust
    /// use corelib::NodeUrl;
    ///
    /// let url: NodeUrl = "node-A@10.0.0.5:7777".parse().unwrap();
    /// assert_eq!(url.id.as_str(), "node-A");
    /// assert_eq!(url.address, "10.0.0.5:7777");
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(NodeUrl::default());
        }

        let rest = match s.strip_prefix(SCHEME) {
            Some(rest) => rest,
            None => {
                if let Some((scheme, _)) = s.split_once("://") {
                    tracing::debug!(url = s, scheme, "rejecting node URL with unknown scheme");
                    return Err(Error::UnknownScheme(scheme.to_string()));
                }
                s
            }
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        match rest.split_once('@') {
            Some(("", _)) => {
                tracing::debug!(url = s, "rejecting node URL with empty id");
                Err(Error::InvalidNodeUrl {
                    url: s.to_string(),
                    reason: "missing node id before '@'".to_string(),
                })
            }
            Some((id, address)) => Ok(NodeUrl::new(id, address)),
            None => Ok(NodeUrl::new(NodeId::default(), rest)),
        }
    }
}

/// Ordered list of node URLs, written comma-separated.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeUrls(pub Vec<NodeUrl>);

impl NodeUrls {
    pub fn iter(&self) -> std::slice::Iter<'_, NodeUrl> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for NodeUrls {
    type Err = Error;

    /// Parse a comma-separated list. A single bad entry fails the whole list.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(NodeUrls::default());
        }
        s.split(',')
            .map(str::parse)
            .collect::<Result<Vec<_>>>()
            .map(NodeUrls)
    }
}

impl fmt::Display for NodeUrls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, url) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", url)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NodeUrls {
    type Item = &'a NodeUrl;
    type IntoIter = std::slice::Iter<'a, NodeUrl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_zero() {
        assert!(NodeId::default().is_zero());
        assert!(!NodeId::from("node-A").is_zero());
    }

    #[test]
    fn test_node_url_display() {
        let url = NodeUrl::new("node-A", "10.0.0.5:7777");
        assert_eq!(url.to_string(), "node-A@10.0.0.5:7777");

        // No id: only the address is written
        let bare = NodeUrl::new(NodeId::default(), "10.0.0.5:7777");
        assert_eq!(bare.to_string(), "10.0.0.5:7777");
    }

    #[test]
    fn test_node_url_is_zero() {
        assert!(NodeUrl::default().is_zero());
        assert!(!NodeUrl::new("node-A", "").is_zero());
        assert!(!NodeUrl::new(NodeId::default(), "host:1").is_zero());
    }

    #[test]
    fn test_parse_with_scheme() {
        let url: NodeUrl = "storj://node-A@10.0.0.5:7777/".parse().unwrap();
        assert_eq!(url, NodeUrl::new("node-A", "10.0.0.5:7777"));
    }

    #[test]
    fn test_parse_rejects_empty_id() {
        let err = "@10.0.0.5:7777".parse::<NodeUrl>().unwrap_err();
        assert!(matches!(err, Error::InvalidNodeUrl { .. }));
    }
}
