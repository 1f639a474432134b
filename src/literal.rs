//! Text form of vectors
//!
//! Vectors display as `Simd4(1, 2, 3, 4)`. Parsing accepts that form with or
//! without the type name, so `"(1, 2, 3, 4)".parse::<Simd4<i32>>()` works too.

use std::str::FromStr;

use crate::{Result, SimdError};

/// Split a vector literal into its lane values
///
/// The lane count is not checked here; the caller knows its width.
pub(crate) fn parse_lanes<S: FromStr>(text: &str, name: &str) -> Result<Vec<S>> {
    let text = text.trim();
    let body = text.strip_prefix(name).unwrap_or(text).trim_start();

    let inner = body
        .strip_prefix('(')
        .ok_or_else(|| SimdError::Parse(format!("expected '(' in {text:?}")))?
        .strip_suffix(')')
        .ok_or_else(|| SimdError::Parse(format!("expected ')' at the end of {text:?}")))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(lane, part)| {
            let part = part.trim();
            part.parse::<S>()
                .map_err(|_| SimdError::Parse(format!("lane {lane}: cannot parse {part:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_form() {
        let lanes: Vec<i32> = parse_lanes("Simd4(1, -2, 3, 4)", "Simd4").unwrap();
        assert_eq!(lanes, vec![1, -2, 3, 4]);
    }

    #[test]
    fn test_bare_form_and_whitespace() {
        let lanes: Vec<f64> = parse_lanes("  ( 0.5,1e3 ,  -inf ) ", "Simd3").unwrap();
        assert_eq!(lanes, vec![0.5, 1000.0, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_empty_body() {
        let lanes: Vec<u8> = parse_lanes("Simd2()", "Simd2").unwrap();
        assert!(lanes.is_empty());
    }

    #[test]
    fn test_missing_parentheses() {
        let err = parse_lanes::<i32>("Simd2 1, 2", "Simd2").unwrap_err();
        assert!(matches!(err, SimdError::Parse(_)));

        let err = parse_lanes::<i32>("Simd2(1, 2", "Simd2").unwrap_err();
        assert!(err.to_string().contains("expected ')'"));
    }

    #[test]
    fn test_bad_lane() {
        let err = parse_lanes::<u8>("(1, 300)", "Simd2").unwrap_err();
        assert_eq!(
            err,
            SimdError::Parse("lane 1: cannot parse \"300\"".to_string())
        );
    }

    #[test]
    fn test_wrong_name_is_rejected() {
        assert!(parse_lanes::<i32>("Simd8(1, 2)", "Simd2").is_err());
    }
}
