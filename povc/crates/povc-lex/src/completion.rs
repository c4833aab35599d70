//! Keyword completion.
//!
//! Editor front ends call these with the document text and caret offset:
//! [`current_word`] finds what the user is typing, [`suggest`] filters the
//! keyword table against it, and [`insertion_text`] computes what to
//! insert once a suggestion is accepted.

use crate::keywords::Keyword;
use crate::unicode::{is_blank, DIRECTIVE_PREFIX};

/// Returns the run of non-blank characters ending at `caret`.
///
/// `caret` is a byte offset. Returns `None` when the run is empty or when
/// `caret` is past the end or inside a character.
/// A run reaching back to the start of the text is still a word, not a
/// missing one.
///
/// ```
/// use povc_lex::completion::current_word;
///
/// assert_eq!(current_word("sphere { pig", 12), Some("pig"));
/// assert_eq!(current_word("sphere ", 7), None);
/// ```
pub fn current_word(text: &str, caret: usize) -> Option<&str> {
    let before = text.get(..caret)?;
    let start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| is_blank(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &before[start..];
    (!word.is_empty()).then_some(word)
}

/// Keywords offered for the word being typed, in table order.
///
/// A lone `#` offers only the directives; a word starting with `#`
/// matches the rest of the word against every keyword.
pub fn suggest(word: Option<&str>) -> Vec<Keyword> {
    let Some(word) = word else {
        return Keyword::ALL.to_vec();
    };

    if word.len() == 1 && word.starts_with(DIRECTIVE_PREFIX) {
        return Keyword::ALL
            .iter()
            .copied()
            .filter(|k| k.occurs_after_directive_prefix())
            .collect();
    }

    let prefix = word.strip_prefix(DIRECTIVE_PREFIX).unwrap_or(word);
    Keyword::ALL
        .iter()
        .copied()
        .filter(|k| k.as_str().starts_with(prefix))
        .collect()
}

/// Text to insert at the caret when `keyword` is accepted.
///
/// A fully typed word gets only the trailing space, never its whole
/// spelling a second time.
///
/// ```
/// use povc_lex::completion::insertion_text;
/// use povc_lex::Keyword;
///
/// assert_eq!(insertion_text(Keyword::Sphere, Some("sph")), "ere ");
/// assert_eq!(insertion_text(Keyword::Pigment, Some("pig")), "ment {\n} ");
/// assert_eq!(insertion_text(Keyword::Declare, Some("#dec")), "lare ");
/// ```
pub fn insertion_text(keyword: Keyword, typed: Option<&str>) -> String {
    let spelling = keyword.as_str();
    let typed = typed.unwrap_or_default();
    let typed = typed.strip_prefix(DIRECTIVE_PREFIX).unwrap_or(typed);

    let mut text = String::from(spelling.strip_prefix(typed).unwrap_or(spelling));
    if keyword.is_visual_attribute() {
        text.push_str(" {\n}");
    }
    text.push(' ');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spellings(keywords: Vec<Keyword>) -> Vec<&'static str> {
        keywords.into_iter().map(Keyword::as_str).collect()
    }

    #[test]
    fn test_current_word_at_start_of_text() {
        assert_eq!(current_word("box", 3), Some("box"));
        assert_eq!(current_word("box", 2), Some("bo"));
        assert_eq!(current_word("box", 0), None);
    }

    #[test]
    fn test_current_word_stops_at_blank() {
        assert_eq!(current_word("camera {\n\tloc", 13), Some("loc"));
        assert_eq!(current_word("a #dec", 6), Some("#dec"));
    }

    #[test]
    fn test_current_word_rejects_bad_caret() {
        assert_eq!(current_word("box", 4), None);
        assert_eq!(current_word("é", 1), None);
        assert_eq!(current_word("é", 2), Some("é"));
    }

    #[test]
    fn test_suggest_without_word_lists_everything() {
        assert_eq!(suggest(None), Keyword::ALL.to_vec());
    }

    #[test]
    fn test_suggest_after_hash() {
        assert_eq!(
            spellings(suggest(Some("#"))),
            ["declare", "default", "end", "if", "ifdef", "ifndef", "local", "macro", "switch", "while"]
        );
    }

    #[test]
    fn test_suggest_hash_prefix() {
        assert_eq!(spellings(suggest(Some("#ifn"))), ["ifndef"]);
        assert_eq!(suggest(Some("#sph")), suggest(Some("sph")));
    }

    #[test]
    fn test_suggest_prefix() {
        assert_eq!(spellings(suggest(Some("sphere"))), ["sphere", "sphere_sweep"]);
        assert!(suggest(Some("zzz")).is_empty());
        assert!(suggest(Some("Sphere")).is_empty());
    }

    #[test]
    fn test_insertion_without_typed_word() {
        assert_eq!(insertion_text(Keyword::Box, None), "box ");
        assert_eq!(insertion_text(Keyword::Texture, None), "texture {\n} ");
    }

    #[test]
    fn test_insertion_after_lone_hash() {
        assert_eq!(insertion_text(Keyword::Ifdef, Some("#")), "ifdef ");
    }

    #[test]
    fn test_insertion_of_complete_word() {
        assert_eq!(insertion_text(Keyword::Box, Some("box")), " ");
        assert_eq!(insertion_text(Keyword::Finish, Some("finish")), " {\n} ");
    }
}
