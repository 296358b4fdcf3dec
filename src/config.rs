use serde::{Deserialize, Serialize};

/// Parser limits configuration
///
/// All limits default to `None` (unlimited). Embedders accepting queries
/// from untrusted callers can cap input size and nesting depth; violations
/// surface as ordinary parse errors positioned at the offending byte.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum query length in bytes.
    pub max_query_length: Option<usize>,
    /// Maximum number of nested operator expressions.
    pub max_nesting_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = ParserConfig::default();
        assert_eq!(config.max_query_length, None);
        assert_eq!(config.max_nesting_depth, None);
    }
}
