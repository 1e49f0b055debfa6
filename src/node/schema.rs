//! Node document (kubectl `get nodes -o json` output).
//!
//! JSON shape, either a list:
//! {
//!   "items": [
//!     { "status": { "addresses": [ { "type": "InternalIP", "address": "172.18.0.3" } ] } }
//!   ]
//! }
//!
//! or a single node:
//! { "status": { "addresses": [ { "type": "InternalIP", "address": "172.18.0.3" } ] } }
//!
//! Only `status.addresses` is read. Unknown fields are ignored; missing and
//! `null` fields deserialize as empty. Keys are matched exactly as kubectl
//! emits them (`"Status"` is not `"status"`).

use serde::{Deserialize, Deserializer};

pub const INTERNAL_IP: &str = "InternalIP";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeAddress {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<NodeAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: NodeStatus,
}

impl Node {
    /// First `InternalIP` address of this node, in document order.
    pub fn internal_ip(&self) -> Option<&str> {
        self.status
            .addresses
            .iter()
            .find(|addr| addr.kind == INTERNAL_IP)
            .map(|addr| addr.address.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Node>,
}

/// The two shapes a nodes document may take.
#[derive(Debug, Clone)]
pub enum NodeDocument {
    List(NodeList),
    Single(Node),
}

impl NodeDocument {
    /// Interpretations of `data`, in the order they are searched.
    ///
    /// The list shape is only offered when it parses with at least one item.
    /// The single-node shape is offered whenever it parses, even if the same
    /// bytes were already accepted as a list.
    pub fn candidates(data: &[u8]) -> Vec<NodeDocument> {
        let mut out = Vec::with_capacity(2);

        match serde_json::from_slice::<NodeList>(data) {
            Ok(list) if !list.items.is_empty() => out.push(NodeDocument::List(list)),
            Ok(_) => tracing::debug!("nodes document has no items"),
            Err(err) => tracing::debug!(%err, "nodes document is not a node list"),
        }

        match serde_json::from_slice::<Node>(data) {
            Ok(node) => out.push(NodeDocument::Single(node)),
            Err(err) => tracing::debug!(%err, "nodes document is not a single node"),
        }

        out
    }

    pub fn nodes(&self) -> &[Node] {
        match self {
            NodeDocument::List(list) => &list.items,
            NodeDocument::Single(node) => std::slice::from_ref(node),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            NodeDocument::List(_) => "list",
            NodeDocument::Single(_) => "single",
        }
    }
}
