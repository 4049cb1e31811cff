//! Levenshtein edit distance.

/// Compute the Levenshtein edit distance between two strings.
///
/// Counts the single-character insertions, deletions and substitutions needed
/// to turn `a` into `b`. Comparison is by `char` and case-sensitive; callers
/// that want case-insensitive matching normalize first.
///
/// Only the previous and current cost rows are kept, so memory is linear in
/// the length of `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, a_ch) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != *b_ch);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
