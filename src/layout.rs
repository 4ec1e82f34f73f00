//! Lyric/notation layout pairing.
//!
//! Song tabs are often pasted as alternating lyric and notation lines. The
//! heuristic here guesses which is which so the renderer can pair a lyric
//! line with the notation line below it.

use serde::Serialize;

fn is_notation_char(c: char) -> bool {
    matches!(
        c,
        '0'..='7'
            | 'A'..='G'
            | 'a'..='g'
            | 'x'
            | 'X'
            | '\''
            | '.'
            | ','
            | '|'
            | '-'
            | '_'
            | ':'
            | '#'
            | '♯'
    ) || c.is_whitespace()
}

/// Guess whether a line is tab notation rather than lyrics.
///
/// A line counts as notation when every character belongs to the tab
/// alphabet; any other character makes it a lyric line. Blank lines are
/// neither.
pub fn is_likely_notation_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(is_notation_char)
}

/// A display row: a lyric line and the notation line sung to it. Either side
/// may be empty when the source had no counterpart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LyricBlock {
    pub lyric: String,
    pub notes: String,
}

/// Pair lyric lines with the notation line that follows each of them.
pub fn build_lyric_notation_blocks(content: &str) -> Vec<LyricBlock> {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();

    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        if is_likely_notation_line(line) {
            blocks.push(LyricBlock {
                lyric: String::new(),
                notes: line.to_string(),
            });
        } else if i + 1 < lines.len() && is_likely_notation_line(lines[i + 1]) {
            blocks.push(LyricBlock {
                lyric: line.to_string(),
                notes: lines[i + 1].to_string(),
            });
            i += 1;
        } else {
            blocks.push(LyricBlock {
                lyric: line.to_string(),
                notes: String::new(),
            });
        }
        i += 1;
    }

    blocks
}

/// Just the lyric lines, newline-joined.
pub fn extract_lyrics_text(content: &str) -> String {
    build_lyric_notation_blocks(content)
        .iter()
        .map(|b| b.lyric.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_line_detection() {
        assert!(is_likely_notation_line("1 2 3 | 6-5-6 , 0"));
        assert!(is_likely_notation_line("C D E F#4 x"));
        assert!(is_likely_notation_line(".6 :5 1''"));
        assert!(!is_likely_notation_line("Twinkle twinkle little star"));
        assert!(!is_likely_notation_line(""));
        assert!(!is_likely_notation_line("   "));
        // H is outside the note alphabet even though most letters pass
        assert!(!is_likely_notation_line("H I J"));
    }

    #[test]
    fn test_pairs_lyric_with_following_notation() {
        let blocks = build_lyric_notation_blocks(
            "Twinkle twinkle little star\n1 1 5 5 6 6 5\nHow I wonder what you are\n4 4 3 3 2 2 1\n",
        );
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lyric, "Twinkle twinkle little star");
        assert_eq!(blocks[0].notes, "1 1 5 5 6 6 5");
        assert_eq!(blocks[1].lyric, "How I wonder what you are");
        assert_eq!(blocks[1].notes, "4 4 3 3 2 2 1");
    }

    #[test]
    fn test_unpaired_lines() {
        let blocks = build_lyric_notation_blocks("1 2 3\n\nJust a lyric\nAnother lyric\n");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].lyric, "");
        assert_eq!(blocks[0].notes, "1 2 3");
        assert_eq!(blocks[1].lyric, "Just a lyric");
        assert_eq!(blocks[1].notes, "");
        assert_eq!(blocks[2].lyric, "Another lyric");
        assert_eq!(blocks[2].notes, "");
    }

    #[test]
    fn test_extract_lyrics_text() {
        let lyrics = extract_lyrics_text("Line one\n1 2 3\nLine two\n4 5 6\n");
        assert_eq!(lyrics, "Line one\nLine two");
    }
}
