//! Generate a `CiliumLoadBalancerIPPool` manifest from a nodes document.
//!
//! Pipeline: nodes JSON -> first InternalIP -> pool CIDR -> YAML manifest.

pub mod error;
pub mod logging;
pub mod node;
pub mod output;
pub mod pool;
pub mod render;

pub use error::{PoolError, Result};
pub use node::extract_internal_ip;
pub use output::Output;
pub use pool::{PoolParams, PoolSpec, derive_pool_cidr};
pub use render::render_pool_manifest;

/// Run the full pipeline. Nothing is rendered unless extraction and
/// derivation both succeed.
pub fn generate(nodes: &[u8], pool_name: &str, params: PoolParams) -> Result<String> {
    let ip = extract_internal_ip(nodes)?;
    let cidr = derive_pool_cidr(&ip, params)?;
    tracing::info!(%ip, %cidr, "derived pool block");

    Ok(render_pool_manifest(&PoolSpec::new(pool_name, cidr)))
}
