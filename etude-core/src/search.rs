/// Byte offsets of every occurrence of `pattern` in `text`, overlapping
/// matches included. Knuth-Morris-Pratt: a prefix table built from the
/// pattern drives a single left-to-right scan of the text.
pub fn find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    let lps = prefix_table(pattern);
    let mut matches = vec![];
    let mut matched = 0;
    for (i, &b) in text.iter().enumerate() {
        while matched > 0 && b != pattern[matched] {
            matched = lps[matched - 1];
        }
        if b == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            matches.push(i + 1 - pattern.len());
            matched = lps[matched - 1];
        }
    }
    matches
}

// lps[i] is the length of the longest proper prefix of pattern[..=i]
// that is also a suffix of it.
fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
        }
    }
    lps
}
