//! Node layer: JSON schema for the nodes document and InternalIP extraction.

pub mod extract;
pub mod schema;

pub use extract::extract_internal_ip;
pub use schema::{Node, NodeAddress, NodeDocument, NodeList, NodeStatus};
