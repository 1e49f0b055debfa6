//! Pool layer: the load-balancer IP pool and how its block is derived.

pub mod cidr;

pub use cidr::{DEFAULT_POOL_MASK, DEFAULT_POOL_OFFSET, PoolParams, derive_pool_cidr};

/// Values substituted into the pool manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSpec {
    pub name: String,
    pub cidr: String,
}

impl PoolSpec {
    pub fn new(name: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cidr: cidr.into(),
        }
    }
}
