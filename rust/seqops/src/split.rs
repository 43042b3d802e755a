//! Comma splitting with bounded space trimming.

/// Splits `s` on commas, consuming only the spaces directly surrounding
/// each comma.
///
/// The empty string yields an empty vector. Spaces inside a token, leading
/// spaces of the first token and trailing spaces of the last token are all
/// preserved: only U+0020 spaces adjacent to a comma are trimmed, never
/// other whitespace.
///
/// ```
/// use seqops::split_by_comma;
///
/// assert_eq!(split_by_comma(""), Vec::<&str>::new());
/// assert_eq!(split_by_comma("1, 2, 3"), ["1", "2", "3"]);
/// assert_eq!(split_by_comma(" 1,    2   ,  3 "), [" 1", "2", "3 "]);
/// ```
pub fn split_by_comma(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = s.split(',').collect();
    let last = tokens.len() - 1;
    for (i, tok) in tokens.iter_mut().enumerate() {
        if i > 0 {
            *tok = tok.trim_start_matches(' ');
        }
        if i < last {
            *tok = tok.trim_end_matches(' ');
        }
    }
    tokens
}
