//! CLI subcommands.

use std::fmt;

use anyhow::Context;
use clap::Subcommand;
use corelib::node::{NodeUrl, NodeUrls};
use uploadselection::Node;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a comma-separated list of node URLs.
    ParseUrls {
        /// URLs in `[storj://][id@]address` form.
        urls: String,
    },
    /// Build a node record from its identity and last-known placement.
    Inspect {
        /// Node URL, `[storj://][id@]address`.
        #[arg(long)]
        node_url: String,
        /// Last-known network block of the node.
        #[arg(long, default_value = "")]
        last_net: String,
        /// Last-known IP and port of the node.
        #[arg(long, default_value = "")]
        last_ip_port: String,
        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Output of a command, printed by the caller.
#[derive(Debug)]
pub enum CommandResult {
    Urls(NodeUrls),
    Node(Node),
    Json(String),
}

impl Command {
    pub fn execute(self) -> anyhow::Result<CommandResult> {
        match self {
            Command::ParseUrls { urls } => {
                let parsed: NodeUrls = urls
                    .parse()
                    .with_context(|| format!("parsing node URLs {:?}", urls))?;
                tracing::info!(count = parsed.len(), "parsed node URLs");
                Ok(CommandResult::Urls(parsed))
            }
            Command::Inspect {
                node_url,
                last_net,
                last_ip_port,
                json,
            } => {
                let url: NodeUrl = node_url
                    .parse()
                    .with_context(|| format!("parsing node URL {:?}", node_url))?;
                let node = Node::new(url, last_net, last_ip_port);
                tracing::debug!(node = %node, "built node record");

                if json {
                    let out = serde_json::to_string_pretty(&node)
                        .context("encoding node record as JSON")?;
                    Ok(CommandResult::Json(out))
                } else {
                    Ok(CommandResult::Node(node))
                }
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Urls(urls) => {
                for (i, url) in urls.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "id={} address={}", url.id, url.address)?;
                }
                Ok(())
            }
            CommandResult::Node(node) => write!(f, "{}", node),
            CommandResult::Json(json) => f.write_str(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    fn execute(args: &[&str]) -> anyhow::Result<CommandResult> {
        let config = CliConfig::try_parse_from(args.iter().copied())?;
        config.command.execute()
    }

    #[test]
    fn test_parse_urls() {
        let result = execute(&[
            "uploadselection",
            "parse-urls",
            "node-A@10.0.0.5:7777,10.0.1.9:7777",
        ])
        .unwrap();
        assert_eq!(
            result.to_string(),
            "id=node-A address=10.0.0.5:7777\nid= address=10.0.1.9:7777"
        );
    }

    #[test]
    fn test_parse_urls_error() {
        let err = execute(&["uploadselection", "parse-urls", "ftp://node-A@host:1"]).unwrap_err();
        assert!(err.to_string().contains("parsing node URLs"));
    }

    #[test]
    fn test_inspect() {
        let result = execute(&[
            "uploadselection",
            "inspect",
            "--node-url",
            "node-A@10.0.0.5:7777",
            "--last-net",
            "10.0.0.0/24",
            "--last-ip-port",
            "10.0.0.5:7777",
        ])
        .unwrap();
        match result {
            CommandResult::Node(node) => {
                assert_eq!(node.id().as_str(), "node-A");
                assert_eq!(node.last_net, "10.0.0.0/24");
                assert_eq!(node.last_ip_port, "10.0.0.5:7777");
            }
            other => panic!("expected node record, got {:?}", other),
        }
    }

    #[test]
    fn test_inspect_json() {
        let result = execute(&[
            "uploadselection",
            "inspect",
            "--node-url",
            "node-A@10.0.0.5:7777",
            "--json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.to_string()).unwrap();
        assert_eq!(value["node_url"]["id"], "node-A");
        assert_eq!(value["last_net"], "");
    }
}
