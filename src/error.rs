use thiserror::Error;

/// Failures of the pool generation pipeline. Each one aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// No `InternalIP` address in the nodes document, or the document is not JSON.
    #[error("could not find InternalIP in nodes data")]
    NotFound,

    #[error("invalid IP address format: {ip}")]
    InvalidFormat { ip: String },
}

impl PoolError {
    /// Pipeline stage that produced the error, for user-facing context.
    pub fn stage(&self) -> &'static str {
        match self {
            PoolError::NotFound => "extract internal IP",
            PoolError::InvalidFormat { .. } => "compute pool CIDR",
        }
    }
}

pub type Result<T> = std::result::Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(PoolError::NotFound.stage(), "extract internal IP");
        assert_eq!(
            PoolError::InvalidFormat {
                ip: "10.0.1".to_string()
            }
            .stage(),
            "compute pool CIDR"
        );
    }
}
