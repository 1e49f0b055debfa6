use crate::error::{PoolError, Result};

pub const DEFAULT_POOL_OFFSET: u32 = 200;
pub const DEFAULT_POOL_MASK: u32 = 29;

/// Parameters of the derived pool block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolParams {
    /// Value written into the fourth octet.
    pub offset: u32,
    pub mask: u32,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_POOL_OFFSET,
            mask: DEFAULT_POOL_MASK,
        }
    }
}

/// Transform `a.b.c.d` into `a.b.255.<offset>/<mask>`.
///
/// Only the dotted-quad shape is checked: four non-empty components. The
/// first two are copied verbatim.
pub fn derive_pool_cidr(ip: &str, params: PoolParams) -> Result<String> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        return Err(PoolError::InvalidFormat { ip: ip.to_string() });
    }

    Ok(format!(
        "{}.{}.255.{}/{}",
        parts[0], parts[1], params.offset, params.mask
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        assert_eq!(
            derive_pool_cidr("192.168.1.100", PoolParams::default()).unwrap(),
            "192.168.255.200/29"
        );
        assert_eq!(
            derive_pool_cidr("172.18.0.3", PoolParams::default()).unwrap(),
            "172.18.255.200/29"
        );
    }

    #[test]
    fn custom_params() {
        let params = PoolParams {
            offset: 64,
            mask: 26,
        };
        assert_eq!(derive_pool_cidr("10.89.0.4", params).unwrap(), "10.89.255.64/26");
    }

    #[test]
    fn octets_are_not_range_checked() {
        assert_eq!(
            derive_pool_cidr("300.abc.1.1", PoolParams::default()).unwrap(),
            "300.abc.255.200/29"
        );
    }

    #[test]
    fn invalid_format() {
        for ip in ["192.168.1", "", "192.168.1.1.1", "1..2.3", "1.2.3.", "localhost"] {
            assert_eq!(
                derive_pool_cidr(ip, PoolParams::default()),
                Err(PoolError::InvalidFormat { ip: ip.to_string() }),
                "{ip:?}"
            );
        }
    }

    #[test]
    fn invalid_format_message() {
        let err = derive_pool_cidr("192.168.1", PoolParams::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid IP address format: 192.168.1");
    }
}
