//! Log truncation for response bodies
//!
//! Keeps stats payloads (one row per entry) from flooding debug logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for logging.
///
/// Strings within the limit are returned unchanged; longer ones keep the
/// first `TRUNCATE_LIMIT` bytes (on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"status":"success"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_stats_body_truncated() {
        let rows = vec!["[1,2,3]"; 200].join(",");
        let body = format!(r#"{{"error":false,"drops":[{rows}]}}"#);
        let result = truncate_for_log(&body);
        assert!(result.len() < body.len());
        assert!(result.ends_with(&format!("total {} bytes]", body.len())));
    }

    #[test]
    fn cut_lands_on_char_boundary() {
        // "★" is 3 bytes; 256 is not a multiple of 3
        let s = "★".repeat(100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"★".repeat(85)));
        assert!(!result.starts_with(&"★".repeat(86)));
    }
}
