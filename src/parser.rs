//! Tab notation parser.
//!
//! Converts raw tablature text into a flat, ordered stream of [`TabToken`]s.
//! Parsing is pure and never fails: fragments that match no grammar rule are
//! dropped silently (tab content is free-form user text, and strict rejection
//! would be hostile), and an input with no notes at all yields a warning
//! rather than an error.
//!
//! ## Grammars
//! - **Number**: `[.:]*[1-7]'*` — a major-scale degree with optional octave
//!   prefixes (`.` = one octave down, `:` = two, cumulative) and `'` suffixes
//!   (one octave up each).
//! - **Letter**: `[A-Ga-g][#♯]?[0-9]?'*` — a note letter with optional sharp,
//!   optional explicit octave digit (defaults to the base pitch's octave),
//!   and `'` suffixes.
//!
//! Both grammars accept `0`, `x`, or `_` (case-insensitive) as a rest, and a
//! trailing dash run as a sustain suffix adding one step per dash.
//!
//! ## Dash disambiguation
//! A token of only dashes is a standalone hold. A token with internal dashes
//! but no trailing dash, whose dash-separated pieces all parse, is a quick
//! chain (`6-5-6` = three fast notes). Everything else is tried as a single
//! piece, so `6--` is one note sustained for three steps. This classification
//! order is load-bearing and must not be rearranged.

use crate::pitch::{self, LabelType, ParseConfig};
use crate::token::{ParseResult, TabToken};

/// Warning emitted when an entire parse produced zero note tokens.
pub const NO_NOTES_WARNING: &str =
    "No notes detected. Make sure the tab content uses numbers (1-7) or letters (A-G).";

/// Map smart punctuation pasted from word processors to plain ASCII so the
/// grammar only ever sees `'`, `-` and `"`.
fn normalize_symbols(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2019}' => '\'',
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

fn sustain_len(piece: &str) -> u32 {
    piece.chars().rev().take_while(|&c| c == '-').count() as u32
}

fn strip_sustain(piece: &str) -> &str {
    piece.trim_end_matches('-')
}

fn is_rest_core(core: &str) -> bool {
    matches!(core, "0" | "_") || core.eq_ignore_ascii_case("x")
}

/// Parse one piece under the Number grammar: `[.:]*[1-7]'*` plus sustain.
fn parse_number_piece(piece: &str, config: &ParseConfig) -> Option<TabToken> {
    let raw = piece.trim();
    let normalized = normalize_symbols(raw);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    let sustain = sustain_len(trimmed);
    let core = strip_sustain(trimmed);

    if is_rest_core(core) {
        return Some(TabToken::Rest {
            raw: raw.to_string(),
            length: 1 + sustain,
        });
    }

    let mut chars = core.chars().peekable();

    let mut octave_shift = 0i32;
    while let Some(&c) = chars.peek() {
        match c {
            '.' => {
                octave_shift -= 1;
                chars.next();
            }
            ':' => {
                octave_shift -= 2;
                chars.next();
            }
            _ => break,
        }
    }

    let degree = match chars.next() {
        Some(c @ '1'..='7') => c.to_digit(10).unwrap() as usize,
        _ => return None,
    };

    for c in chars {
        if c == '\'' {
            octave_shift += 1;
        } else {
            return None;
        }
    }

    let midi =
        config.base_midi + octave_shift * 12 + pitch::MAJOR_DEGREE_TO_SEMITONE[degree - 1];

    Some(TabToken::Note {
        raw: raw.to_string(),
        pitch_name: pitch::midi_to_note_name(midi),
        length: 1 + sustain,
    })
}

/// Parse one piece under the Letter grammar: `[A-Ga-g][#♯]?[0-9]?'*` plus
/// sustain. Without an explicit octave digit the base pitch's octave is used.
fn parse_letter_piece(piece: &str, config: &ParseConfig) -> Option<TabToken> {
    let raw = piece.trim();
    let normalized = normalize_symbols(raw);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    let sustain = sustain_len(trimmed);
    let core = strip_sustain(trimmed);

    if is_rest_core(core) {
        return Some(TabToken::Rest {
            raw: raw.to_string(),
            length: 1 + sustain,
        });
    }

    let mut chars = core.chars().peekable();

    let semitone = pitch::letter_to_semitone(chars.next()?)?;

    let sharp = if matches!(chars.peek(), Some(&'#') | Some(&'♯')) {
        chars.next();
        1
    } else {
        0
    };

    let explicit_octave = match chars.peek() {
        Some(&c) if c.is_ascii_digit() => {
            chars.next();
            Some(c.to_digit(10).unwrap() as i32)
        }
        _ => None,
    };

    let mut quotes = 0i32;
    for c in chars {
        if c == '\'' {
            quotes += 1;
        } else {
            return None;
        }
    }

    let octave = explicit_octave.unwrap_or_else(|| config.base_octave()) + quotes;
    let midi = 12 * (octave + 1) + semitone + sharp;

    Some(TabToken::Note {
        raw: raw.to_string(),
        pitch_name: pitch::midi_to_note_name(midi),
        length: 1 + sustain,
    })
}

fn parse_piece(piece: &str, config: &ParseConfig) -> Option<TabToken> {
    match config.label_type {
        LabelType::Letter => parse_letter_piece(piece, config),
        LabelType::Number => parse_number_piece(piece, config),
    }
}

/// Split one source line into raw tokens. `,` and `|` always stand alone;
/// brackets, braces, parens and semicolons are pure separators and vanish.
fn tokenize_line(line: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(line.len() + 8);
    for c in normalize_symbols(line).chars() {
        match c {
            ',' | '\u{FF0C}' => spaced.push_str(" , "),
            '|' => spaced.push_str(" | "),
            ';' | '(' | ')' | '[' | ']' | '{' | '}' => spaced.push(' '),
            other => spaced.push(other),
        }
    }
    spaced.split_whitespace().map(str::to_string).collect()
}

fn is_hold_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c == '-')
}

/// Try a token as a quick chain (`6-5-6` = three fast notes).
///
/// A chain needs an internal dash, must not end in a dash (that spelling is
/// always a sustain suffix on a single piece), and every dash-separated piece
/// must parse on its own; otherwise the token is not a chain.
fn parse_quick_chain(token: &str, config: &ParseConfig) -> Option<Vec<TabToken>> {
    if !token.contains('-') || token.ends_with('-') {
        return None;
    }
    let pieces: Vec<&str> = token
        .split('-')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if pieces.len() < 2 {
        return None;
    }
    pieces.iter().map(|p| parse_piece(p, config)).collect()
}

/// Parse tab content into tokens.
///
/// Pure and total: identical inputs give identical results, and no input
/// raises an error. The single warning today is [`NO_NOTES_WARNING`], added
/// when the whole input produced zero note tokens.
pub fn parse_tab(content: &str, config: &ParseConfig) -> ParseResult {
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();
    let mut notes_count = 0usize;

    for line in content.lines() {
        let mut line_has_tokens = false;

        for part in tokenize_line(line) {
            let part = part.as_str();

            if part == "," {
                line_has_tokens = true;
                tokens.push(TabToken::Beat);
                continue;
            }

            if part == "|" {
                line_has_tokens = true;
                tokens.push(TabToken::Bar);
                // A bar ends the display line even mid-source-line.
                tokens.push(TabToken::LineBreak);
                continue;
            }

            if is_hold_token(part) {
                line_has_tokens = true;
                tokens.push(TabToken::Hold {
                    raw: part.to_string(),
                    length: part.chars().count() as u32,
                });
                continue;
            }

            if let Some(chain) = parse_quick_chain(part, config) {
                line_has_tokens = true;
                notes_count += chain.iter().filter(|t| t.is_note()).count();
                tokens.extend(chain);
                continue;
            }

            if let Some(token) = parse_piece(part, config) {
                line_has_tokens = true;
                if token.is_note() {
                    notes_count += 1;
                }
                tokens.push(token);
            }
            // Anything else is stray text; drop it without complaint.
        }

        if line_has_tokens {
            tokens.push(TabToken::LineBreak);
        }
    }

    if notes_count == 0 {
        warnings.push(NO_NOTES_WARNING.to_string());
    }

    ParseResult { tokens, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_config() -> ParseConfig {
        ParseConfig::default()
    }

    fn letter_config() -> ParseConfig {
        ParseConfig::new(LabelType::Letter, 60)
    }

    fn pitch_names(result: &ParseResult) -> Vec<&str> {
        result
            .tokens
            .iter()
            .filter_map(|t| match t {
                TabToken::Note { pitch_name, .. } => Some(pitch_name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_major_scale_degrees() {
        let result = parse_tab("1 2 3 4 5 6 7", &number_config());
        assert_eq!(
            pitch_names(&result),
            vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4"]
        );
        for token in &result.tokens {
            if let TabToken::Note { length, .. } = token {
                assert_eq!(*length, 1);
            }
        }
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_octave_prefixes_and_quotes() {
        let result = parse_tab(".6 :5 1' 2''", &number_config());
        // .6 = A3, :5 = G2, 1' = C5, 2'' = D6
        assert_eq!(pitch_names(&result), vec!["A3", "G2", "C5", "D6"]);
    }

    #[test]
    fn test_sustain_suffix() {
        let result = parse_tab("6--", &number_config());
        assert_eq!(result.tokens.len(), 2); // note + line break
        assert_eq!(
            result.tokens[0],
            TabToken::Note {
                raw: "6--".to_string(),
                pitch_name: "A4".to_string(),
                length: 3,
            }
        );
    }

    #[test]
    fn test_quick_chain_vs_sustain() {
        // 6-5-6 is three quick notes, 6-- is one sustained note.
        let chain = parse_tab("6-5-6", &number_config());
        assert_eq!(pitch_names(&chain), vec!["A4", "G4", "A4"]);
        for token in &chain.tokens {
            if let TabToken::Note { length, .. } = token {
                assert_eq!(*length, 1);
            }
        }

        let sustained = parse_tab("6--", &number_config());
        assert_eq!(pitch_names(&sustained), vec!["A4"]);
        assert!(matches!(
            sustained.tokens[0],
            TabToken::Note { length: 3, .. }
        ));
    }

    #[test]
    fn test_chain_with_rest_piece() {
        let result = parse_tab("6-0-6", &number_config());
        assert_eq!(result.tokens.len(), 4); // note, rest, note, line break
        assert!(matches!(result.tokens[0], TabToken::Note { .. }));
        assert!(matches!(result.tokens[1], TabToken::Rest { .. }));
        assert!(matches!(result.tokens[2], TabToken::Note { .. }));
    }

    #[test]
    fn test_chain_with_empty_piece_collapses() {
        // Split pieces that are empty are ignored, so 6--5 is still a chain.
        let result = parse_tab("6--5", &number_config());
        assert_eq!(pitch_names(&result), vec!["A4", "G4"]);
    }

    #[test]
    fn test_trailing_dash_is_never_a_chain() {
        // Internal dash plus trailing dash: sustain wins, and the core
        // "6-5" matches no single-piece grammar, so the token drops.
        let result = parse_tab("6-5-", &number_config());
        assert_eq!(pitch_names(&result), Vec::<&str>::new());
    }

    #[test]
    fn test_rest_recognition() {
        for rest in ["0", "x", "X", "_"] {
            let result = parse_tab(rest, &number_config());
            assert_eq!(
                result.tokens[0],
                TabToken::Rest {
                    raw: rest.to_string(),
                    length: 1,
                },
                "{rest:?} should parse as a rest"
            );
        }
    }

    #[test]
    fn test_rest_with_sustain() {
        let result = parse_tab("0--", &number_config());
        assert!(matches!(result.tokens[0], TabToken::Rest { length: 3, .. }));
    }

    #[test]
    fn test_standalone_hold() {
        let result = parse_tab("---", &number_config());
        assert_eq!(
            result.tokens[0],
            TabToken::Hold {
                raw: "---".to_string(),
                length: 3,
            }
        );
    }

    #[test]
    fn test_beat_and_bar_separators() {
        let result = parse_tab("1 , 2 | 3", &number_config());
        let kinds: Vec<_> = result.tokens.iter().collect();
        assert!(matches!(kinds[0], TabToken::Note { .. }));
        assert!(matches!(kinds[1], TabToken::Beat));
        assert!(matches!(kinds[2], TabToken::Note { .. }));
        assert!(matches!(kinds[3], TabToken::Bar));
        // Bar forces a line break even mid-source-line.
        assert!(matches!(kinds[4], TabToken::LineBreak));
        assert!(matches!(kinds[5], TabToken::Note { .. }));
        assert!(matches!(kinds[6], TabToken::LineBreak));
    }

    #[test]
    fn test_separators_need_no_spacing() {
        // "1,2|3" tokenizes the same as "1 , 2 | 3".
        let spaced = parse_tab("1 , 2 | 3", &number_config());
        let packed = parse_tab("1,2|3", &number_config());
        assert_eq!(spaced.tokens, packed.tokens);
    }

    #[test]
    fn test_brackets_are_separators() {
        let result = parse_tab("(1) [2]; {3}", &number_config());
        assert_eq!(pitch_names(&result), vec!["C4", "D4", "E4"]);
    }

    #[test]
    fn test_no_notes_warning() {
        let result = parse_tab("| , |", &number_config());
        assert!(pitch_names(&result).is_empty());
        assert_eq!(result.warnings, vec![NO_NOTES_WARNING.to_string()]);
    }

    #[test]
    fn test_unparsable_fragment_dropped_silently() {
        let result = parse_tab("1 ??? 2", &number_config());
        assert_eq!(pitch_names(&result), vec!["C4", "D4"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_line_breaks_only_for_productive_lines() {
        let result = parse_tab("1\n\nlyrics only here\n2", &number_config());
        assert_eq!(result.tokens.len(), 4);
        assert!(matches!(result.tokens[0], TabToken::Note { .. }));
        assert!(matches!(result.tokens[1], TabToken::LineBreak));
        assert!(matches!(result.tokens[2], TabToken::Note { .. }));
        assert!(matches!(result.tokens[3], TabToken::LineBreak));
    }

    #[test]
    fn test_letter_grammar_basics() {
        let result = parse_tab("C D E F# A", &letter_config());
        assert_eq!(pitch_names(&result), vec!["C4", "D4", "E4", "F#4", "A4"]);
    }

    #[test]
    fn test_letter_octave_default_and_explicit() {
        // No octave digit defaults to the base pitch's octave.
        let base_c4 = parse_tab("C", &letter_config());
        assert_eq!(pitch_names(&base_c4), vec!["C4"]);

        // An explicit digit wins regardless of base pitch.
        let explicit = parse_tab("C5", &letter_config());
        assert_eq!(pitch_names(&explicit), vec!["C5"]);

        let low_base = ParseConfig::new(LabelType::Letter, 48); // C3
        let base_c3 = parse_tab("C", &low_base);
        assert_eq!(pitch_names(&base_c3), vec!["C3"]);
    }

    #[test]
    fn test_letter_quotes_raise_octaves() {
        let result = parse_tab("C' C5' c#''", &letter_config());
        assert_eq!(pitch_names(&result), vec!["C5", "C6", "C#6"]);
    }

    #[test]
    fn test_letter_case_insensitive() {
        let result = parse_tab("c d e", &letter_config());
        assert_eq!(pitch_names(&result), vec!["C4", "D4", "E4"]);
    }

    #[test]
    fn test_letter_grammar_chain() {
        let result = parse_tab("C-E-G", &letter_config());
        assert_eq!(pitch_names(&result), vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn test_smart_punctuation_normalized() {
        // Em dashes act as sustain, the curly apostrophe as an octave mark,
        // and the fullwidth comma as a beat separator.
        let result = parse_tab("6\u{2014}\u{2014} 1\u{2019}\u{FF0C}2", &number_config());
        assert!(matches!(result.tokens[0], TabToken::Note { length: 3, .. }));
        assert_eq!(pitch_names(&result), vec!["A4", "C5", "D4"]);
        assert!(result.tokens.iter().any(|t| matches!(t, TabToken::Beat)));
    }

    #[test]
    fn test_raw_text_preserved() {
        // raw keeps the piece spelling as tokenized (post-normalization).
        let result = parse_tab("6\u{2013}\u{2013}", &number_config());
        assert_eq!(
            result.tokens[0],
            TabToken::Note {
                raw: "6--".to_string(),
                pitch_name: "A4".to_string(),
                length: 3,
            }
        );
    }

    #[test]
    fn test_degree_out_of_range_dropped() {
        let result = parse_tab("8 9 12", &number_config());
        assert!(pitch_names(&result).is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let content = "1 2 3 | 6-5-6 , 0\nC-- x";
        let first = parse_tab(content, &number_config());
        let second = parse_tab(content, &number_config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_content() {
        let result = parse_tab("", &number_config());
        assert!(result.tokens.is_empty());
        assert_eq!(result.warnings, vec![NO_NOTES_WARNING.to_string()]);
    }
}
