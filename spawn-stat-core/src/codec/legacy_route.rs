//! Legacy positional route file
//!
//! Whitespace-separated unsigned integers in route order.

/// Encode a route as space-separated indices.
#[must_use]
pub fn encode(route: &[usize]) -> String {
    route
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a route file against a store of `len` entries.
///
/// Each value is read as an unsigned integer: an optional sign followed by
/// digits. A leading `-` wraps around, so `-2` becomes a huge index that
/// is dropped like any other index `>= len`. Reading stops at the first value
/// with no digits, at a value that overflows, or right after a number that is
/// directly followed by other characters (`1.5` yields `1` and stops).
/// Duplicates are kept and collapse when the route is rebuilt through toggles.
#[must_use]
pub fn decode(text: &str, len: usize) -> Vec<usize> {
    let mut route = Vec::new();
    let mut rest = text;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let Some((index, tail)) = read_unsigned(rest) else {
            let token = rest.split_whitespace().next().unwrap_or(rest);
            log::warn!("Route file: stopping at unreadable token {token:?}");
            break;
        };
        if index < len {
            route.push(index);
        } else {
            log::warn!("Route file: dropping index {index} (entry count: {len})");
        }
        if tail.starts_with(|c: char| !c.is_whitespace()) {
            log::warn!("Route file: stopping at trailing text {tail:?}");
            break;
        }
        rest = tail;
    }
    route
}

/// Read one leading unsigned value; `None` when there are no digits or it overflows.
fn read_unsigned(text: &str) -> Option<(usize, &str)> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = body[..digits].parse::<usize>().ok()?;
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    Some((value, &body[digits..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_with_spaces() {
        assert_eq!(encode(&[3, 0, 12]), "3 0 12");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_accepts_any_whitespace() {
        assert_eq!(decode("2 0\n1\t3 ", 4), vec![2, 0, 1, 3]);
    }

    #[test]
    fn decode_stops_at_first_bad_token() {
        assert_eq!(decode("1 2 x 3", 5), vec![1, 2]);
        assert_eq!(decode("1 - 3", 5), vec![1]);
    }

    #[test]
    fn decode_negative_wraps_and_is_dropped() {
        assert_eq!(decode("1 -2 3", 5), vec![1, 3]);
        assert_eq!(decode("+2 0", 5), vec![2, 0]);
    }

    #[test]
    fn decode_keeps_number_before_trailing_text() {
        assert_eq!(decode("1.5 2", 5), vec![1]);
        assert_eq!(decode("0 3abc 1", 5), vec![0, 3]);
    }

    #[test]
    fn decode_stops_on_overflow() {
        assert_eq!(decode("1 99999999999999999999999 2", 5), vec![1]);
    }

    #[test]
    fn decode_drops_out_of_range() {
        assert_eq!(decode("0 9 1", 3), vec![0, 1]);
    }

    #[test]
    fn decode_empty() {
        assert!(decode("", 3).is_empty());
        assert!(decode("   \n", 3).is_empty());
    }

    #[test]
    fn round_trip() {
        let route = vec![4, 1, 3];
        assert_eq!(decode(&encode(&route), 5), route);
    }
}
