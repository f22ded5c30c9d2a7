/// Longest raw command line the shell accepts, in bytes. Longer input is
/// clamped before any other processing.
pub const MAX_LINE_LEN: usize = 1024;

/// One tokenized input line. Tokens borrow the line they were split from.
#[derive(Debug, PartialEq, Eq)]
pub struct Parsed<'a> {
    pub tokens: Vec<&'a str>,
    pub background: bool,
}

/// Split a line on whitespace (space, tab, newline). Tokens are never empty.
/// A final token that is exactly `&` is stripped and sets the background
/// flag instead of being passed to the command.
pub fn tokenize(line: &str) -> Parsed<'_> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    let mut background = false;

    if tokens.last() == Some(&"&") {
        tokens.pop();
        background = true;
    }

    Parsed { tokens, background }
}

/// Truncate `line` to at most `MAX_LINE_LEN` bytes without splitting a
/// UTF-8 character.
pub fn clamp(line: &str) -> &str {
    if line.len() <= MAX_LINE_LEN {
        return line;
    }
    let mut end = MAX_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let parsed = tokenize("echo hello world");
        assert_eq!(parsed.tokens, vec!["echo", "hello", "world"]);
        assert!(!parsed.background);
    }

    #[test]
    fn test_mixed_whitespace() {
        let parsed = tokenize("  ls\t-l\n");
        assert_eq!(parsed.tokens, vec!["ls", "-l"]);
        assert!(!parsed.background);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize("").tokens.is_empty());
        assert!(tokenize("   \t  ").tokens.is_empty());
    }

    #[test]
    fn test_background_marker() {
        let parsed = tokenize("sleep 10 &");
        assert_eq!(parsed.tokens, vec!["sleep", "10"]);
        assert!(parsed.background);
    }

    #[test]
    fn test_ampersand_must_be_its_own_token() {
        let parsed = tokenize("echo a&");
        assert_eq!(parsed.tokens, vec!["echo", "a&"]);
        assert!(!parsed.background);
    }

    #[test]
    fn test_lone_ampersand() {
        let parsed = tokenize("&");
        assert!(parsed.tokens.is_empty());
        assert!(parsed.background);
    }

    #[test]
    fn test_rejoined_tokens_preserve_content() {
        let line = "  grep   -r \tpattern  . ";
        let parsed = tokenize(line);
        assert_eq!(parsed.tokens.join(" "), "grep -r pattern .");
    }

    #[test]
    fn test_clamp_short_line_untouched() {
        assert_eq!(clamp("pwd"), "pwd");
    }

    #[test]
    fn test_clamp_long_line() {
        let long = "x".repeat(MAX_LINE_LEN + 20);
        assert_eq!(clamp(&long).len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_clamp_respects_char_boundary() {
        // 3-byte chars, so the 1024-byte cut lands mid-character.
        let long = "あ".repeat(MAX_LINE_LEN);
        let clamped = clamp(&long);
        assert!(clamped.len() <= MAX_LINE_LEN);
        assert!(clamped.chars().all(|c| c == 'あ'));
    }
}
