use crate::pool::PoolSpec;

/// Render a `CiliumLoadBalancerIPPool` manifest.
///
/// Values are substituted as-is; nothing is quoted or escaped.
pub fn render_pool_manifest(pool: &PoolSpec) -> String {
    format!(
        "apiVersion: cilium.io/v2alpha1
kind: CiliumLoadBalancerIPPool
metadata:
  name: {name}
spec:
  blocks:
  - cidr: {cidr}
",
        name = pool.name,
        cidr = pool.cidr,
    )
}
