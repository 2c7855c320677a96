//! Error types for the tactics board

use std::fmt;

/// Errors that can occur while configuring or updating the board
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Tessellation input has fewer than 3 distinct, non-collinear sites
    DegenerateSites {
        /// Number of distinct sites that were supplied
        distinct: usize,
    },
    /// Requested marker ID does not exist
    MarkerNotFound(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            BoardError::DegenerateSites { distinct } => write!(
                f,
                "cannot tessellate {} distinct site(s): need at least 3 non-collinear",
                distinct
            ),
            BoardError::MarkerNotFound(id) => write!(f, "marker not found: {}", id),
        }
    }
}

impl std::error::Error for BoardError {}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BoardError::InvalidConfig("stripe spacing must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: stripe spacing must be positive"
        );

        let err = BoardError::DegenerateSites { distinct: 1 };
        assert!(err.to_string().contains("1 distinct site"));

        assert_eq!(BoardError::MarkerNotFound(42).to_string(), "marker not found: 42");
    }
}
