//! Validation functions for dotted paths.

use thiserror::Error;

use crate::util::SEPARATOR;

/// Maximum allowed path string length, in bytes.
pub const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed number of segments.
pub const MAX_PATH_DEPTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is {0} bytes long, the limit is {max}", max = MAX_PATH_LENGTH)]
    PathTooLong(usize),
    #[error("path has {0} segments, the limit is {max}", max = MAX_PATH_DEPTH)]
    PathTooDeep(usize),
}

/// Validate a dotted path.
///
/// Lookups themselves accept any string; this is for callers that take
/// paths from untrusted input.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds the maximum length (1024 bytes)
/// - The path has more than 256 segments
///
/// # Example
///
/// ```
/// use json_arr_path::validate_path;
///
/// validate_path("a.b.c").unwrap();
/// validate_path(&vec!["x"; 300].join(".")).unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong(path.len()));
    }
    let depth = path.split(SEPARATOR).count();
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::PathTooDeep(depth));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_short_path() {
        assert!(validate_path("").is_ok());
        assert!(validate_path("foo.bar").is_ok());
    }

    #[test]
    fn test_validate_long_path() {
        let long = "a".repeat(2000);
        assert_eq!(validate_path(&long), Err(PathError::PathTooLong(2000)));
    }

    #[test]
    fn test_validate_deep_path() {
        let deep = vec!["a"; 300].join(".");
        assert_eq!(validate_path(&deep), Err(PathError::PathTooDeep(300)));
    }

    #[test]
    fn test_validate_max_depth_path() {
        let path = vec!["a"; 256].join(".");
        assert!(validate_path(&path).is_ok());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            PathError::PathTooDeep(300).to_string(),
            "path has 300 segments, the limit is 256"
        );
    }
}
