//! LIKE pattern building for substring search.

/// Escape character used with every LIKE built by `contains_pattern`. Not a backslash, since
/// MySQL treats that as an escape inside string literals too.
pub const LIKE_ESCAPE: char = '!';

/// `%needle%` with LIKE wildcards in the needle escaped. Case is left alone; the comparison
/// operator decides case sensitivity.
pub fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out.push('%');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_keeps_case() {
        assert_eq!(contains_pattern("Ana"), "%Ana%");
        assert_eq!(contains_pattern("Ángel"), "%Ángel%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50!%!_off%");
        assert_eq!(contains_pattern("wow!"), "%wow!!%");
    }
}
