//! Helpers for ZenQ's "R"-prefixed response status codes
//!
//! The exchange reports outcomes as strings of the form `R<number>`
//! ("R200", "R422", ...). Some endpoints carry the code in the payload,
//! others signal success only through the HTTP status line; both paths
//! end up as an R-code on the result record.

/// Status code reported when client-side validation fails before any
/// network call is made
pub const VALIDATION_FAILED: &str = "R422";

/// True if a raw exchange status code indicates success (R2xx)
pub fn is_success(code: &str) -> bool {
    code.strip_prefix('R')
        .and_then(|digits| digits.parse::<u16>().ok())
        .is_some_and(|n| (200..300).contains(&n))
}

/// Map an HTTP status number onto the exchange's code scheme
pub fn from_http(status: u16) -> String {
    format!("R{status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes() {
        assert!(is_success("R200"));
        assert!(is_success("R201"));
        assert!(is_success("R299"));
    }

    #[test]
    fn test_failure_codes() {
        assert!(!is_success("R422"));
        assert!(!is_success("R500"));
        assert!(!is_success("R199"));
        assert!(!is_success(VALIDATION_FAILED));
    }

    #[test]
    fn test_garbage_codes() {
        assert!(!is_success(""));
        assert!(!is_success("200"));
        assert!(!is_success("ROK"));
        assert!(!is_success("Rx200"));
    }

    #[test]
    fn test_from_http() {
        assert_eq!(from_http(200), "R200");
        assert_eq!(from_http(503), "R503");
        assert!(is_success(&from_http(204)));
    }
}
