//! Environment variable parsing with warn-level logging for invalid values.

/// Parse the raw value of environment variable `var` with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u64 = parse_with_default("FRAME_TEST", Some("42"), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u64 = parse_with_default("FRAME_TEST", Some("banana"), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_value() {
        let result: u64 = parse_with_default("FRAME_TEST", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_empty_value() {
        let result: u64 = parse_with_default("FRAME_TEST", Some(""), 10);
        assert_eq!(result, 10);
    }
}
