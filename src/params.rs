// Request parameter coercion
//
// Malformed input is never rejected here: each function folds whatever the
// client sent into the value the query layer binds.

/// Leading-integer parse of a path id.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits. Anything after the digits is ignored (`"12abc"` is 12).
/// Returns `None` when no digit leads or the value does not fit in an `i64`;
/// callers treat that as "not found".
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}

/// Value of `key` in a decoded query string.
///
/// A key given more than once has no single value and yields `None`, the same
/// as a missing key; the flag coercions below fold that into their defaults.
pub fn query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    let mut matches = pairs.iter().filter(|(k, _)| k == key);

    match (matches.next(), matches.next()) {
        (Some((_, value)), None) => Some(value.as_str()),
        _ => None,
    }
}

/// Vegetarian flag for the dish filter.
///
/// Only the exact literal `"true"` selects vegetarian dishes. Every other
/// value, including `"TRUE"`, `""`, `"false"` and a missing parameter,
/// selects non-vegetarian dishes.
pub fn dish_veg_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Flag value for the restaurant filter.
///
/// Accepts the stored spelling (`"1"` / `"0"`) and the boolean spelling
/// (`"true"` / `"false"`). Anything else yields `None`, which binds as SQL
/// `NULL` and matches no row.
pub fn restaurant_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("1") | Some("true") => Some(true),
        Some("0") | Some("false") => Some(false),
        _ => None,
    }
}
