use crate::error::{PoolError, Result};
use crate::node::schema::NodeDocument;

/// Return the first `InternalIP` address in a nodes document.
///
/// Nodes are scanned in document order, then each node's addresses in order.
/// A node list is searched before the single-node reading of the same bytes.
pub fn extract_internal_ip(data: &[u8]) -> Result<String> {
    for doc in NodeDocument::candidates(data) {
        let found = doc.nodes().iter().find_map(|node| node.internal_ip());
        if let Some(ip) = found {
            tracing::debug!(shape = doc.shape(), %ip, "found InternalIP");
            return Ok(ip.to_string());
        }
        tracing::debug!(shape = doc.shape(), "no InternalIP in nodes document");
    }

    Err(PoolError::NotFound)
}
