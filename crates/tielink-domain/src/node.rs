//! Node identity

use std::fmt;
use std::str::FromStr;

/// Opaque, stable identifier of a node in the communication graph
///
/// Identifiers come straight from the input node table; they carry no
/// positional meaning and need not be contiguous.
///
/// # Examples
///
/// ```
/// use tielink_domain::NodeId;
///
/// let id = NodeId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a NodeId from its raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid node id '{}': {}", s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert_eq!(NodeId::from(7), NodeId::new(7));
    }

    #[test]
    fn test_node_id_parse() {
        assert_eq!(" 12 ".parse::<NodeId>().unwrap(), NodeId::new(12));
        assert!("abc".parse::<NodeId>().is_err());
        assert!("".parse::<NodeId>().is_err());
        assert!("-3".parse::<NodeId>().is_err());
    }
}
