/// Remove the first value satisfying the predicate, returning it.
pub(crate) fn remove_first<T, F: FnMut(&T) -> bool>(vals: &mut Vec<T>, predicate: F) -> Option<T> {
    let idx = vals.iter().position(predicate)?;
    Some(vals.remove(idx))
}

/// Parse a string holding a canonical decimal integer:
/// an optional `-`, then digits without leading zeros, fitting in an `i64`.
///
/// `"0"` is canonical, `"-0"`, `"+1"`, `"01"` and `" 1"` are not.
pub(crate) fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut chars = digits.chars();
    match chars.next()? {
        '0' if digits.len() == 1 && digits.len() == s.len() => return Some(0),
        '1'..='9' => (),
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
