/// Shorten an opaque hash or address for display, keeping both ends visible.
#[must_use]
pub fn shorten(s: &str, length: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= length {
        return s.to_string();
    }

    let half = length / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();

    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_keeps_both_ends_of_a_hash() {
        let hash = "647B1266BC9D607EFFD5C0E93C81D7619D3F443D5E9BE703A50C7A76620B1739";
        assert_eq!(shorten(hash, 10), "647B1...B1739");
    }

    #[test]
    fn test_shorten_leaves_short_strings_alone() {
        assert_eq!(shorten("cosmos1aaa", 16), "cosmos1aaa");
    }

    #[test]
    fn test_shorten_with_odd_length_rounds_down() {
        assert_eq!(shorten("0123456789abcdef", 5), "01...ef");
    }
}
