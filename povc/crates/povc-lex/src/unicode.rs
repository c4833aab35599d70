//! Character classes used by the classification state machine.
//!
//! Scene files are mostly ASCII, but whitespace and digits follow the
//! Unicode definitions used by the scene tools. Space separators and the
//! ASCII control separators are blank, non-breaking spaces are not, and
//! any decimal digit (`Nd`) counts as a digit.

/// Characters that end a word and can never start one.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '<', '>', '#', '(', ')', '{', '}', ';', ':', '*', '+', '=',
];

/// Single-character operators.
///
/// `/` is not an operator: it only ever starts a comment or falls
/// through to a word.
pub const OPERATORS: &[char] = &['*', '+', '='];

/// The directive prefix that introduces `#declare`, `#if` and friends.
pub const DIRECTIVE_PREFIX: char = '#';

/// Checks if a character is blank.
///
/// Blank characters are Unicode white space minus the non-breaking
/// spaces (U+00A0, U+2007, U+202F) and NEL (U+0085), plus the ASCII
/// file/group/record/unit separators (U+001C..=U+001F).
///
/// # Example
///
/// ```
/// use povc_lex::unicode::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\n'));
/// assert!(is_blank('\u{2003}')); // em space
/// assert!(!is_blank('\u{a0}')); // no-break space
/// assert!(!is_blank('x'));
/// ```
#[inline]
pub fn is_blank(c: char) -> bool {
    match c {
        ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}' => true,
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c if c.is_ascii() => false,
        c => c.is_whitespace(),
    }
}

/// Checks if a character is one of the word-terminating punctuation marks.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Checks if a character is a single-character operator.
#[inline]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Unicode decimal digit blocks (general category Nd), sorted.
const DECIMAL_DIGITS: &[(char, char)] = &[
    ('\u{30}', '\u{39}'), ('\u{660}', '\u{669}'), ('\u{6F0}', '\u{6F9}'),
    ('\u{7C0}', '\u{7C9}'), ('\u{966}', '\u{96F}'), ('\u{9E6}', '\u{9EF}'),
    ('\u{A66}', '\u{A6F}'), ('\u{AE6}', '\u{AEF}'), ('\u{B66}', '\u{B6F}'),
    ('\u{BE6}', '\u{BEF}'), ('\u{C66}', '\u{C6F}'), ('\u{CE6}', '\u{CEF}'),
    ('\u{D66}', '\u{D6F}'), ('\u{DE6}', '\u{DEF}'), ('\u{E50}', '\u{E59}'),
    ('\u{ED0}', '\u{ED9}'), ('\u{F20}', '\u{F29}'), ('\u{1040}', '\u{1049}'),
    ('\u{1090}', '\u{1099}'), ('\u{17E0}', '\u{17E9}'), ('\u{1810}', '\u{1819}'),
    ('\u{1946}', '\u{194F}'), ('\u{19D0}', '\u{19D9}'), ('\u{1A80}', '\u{1A89}'),
    ('\u{1A90}', '\u{1A99}'), ('\u{1B50}', '\u{1B59}'), ('\u{1BB0}', '\u{1BB9}'),
    ('\u{1C40}', '\u{1C49}'), ('\u{1C50}', '\u{1C59}'), ('\u{A620}', '\u{A629}'),
    ('\u{A8D0}', '\u{A8D9}'), ('\u{A900}', '\u{A909}'), ('\u{A9D0}', '\u{A9D9}'),
    ('\u{A9F0}', '\u{A9F9}'), ('\u{AA50}', '\u{AA59}'), ('\u{ABF0}', '\u{ABF9}'),
    ('\u{FF10}', '\u{FF19}'), ('\u{104A0}', '\u{104A9}'), ('\u{10D30}', '\u{10D39}'),
    ('\u{11066}', '\u{1106F}'), ('\u{110F0}', '\u{110F9}'), ('\u{11136}', '\u{1113F}'),
    ('\u{111D0}', '\u{111D9}'), ('\u{112F0}', '\u{112F9}'), ('\u{11450}', '\u{11459}'),
    ('\u{114D0}', '\u{114D9}'), ('\u{11650}', '\u{11659}'), ('\u{116C0}', '\u{116C9}'),
    ('\u{11730}', '\u{11739}'), ('\u{118E0}', '\u{118E9}'), ('\u{11950}', '\u{11959}'),
    ('\u{11C50}', '\u{11C59}'), ('\u{11D50}', '\u{11D59}'), ('\u{11DA0}', '\u{11DA9}'),
    ('\u{11F50}', '\u{11F59}'), ('\u{16A60}', '\u{16A69}'), ('\u{16AC0}', '\u{16AC9}'),
    ('\u{16B50}', '\u{16B59}'), ('\u{1D7CE}', '\u{1D7FF}'), ('\u{1E140}', '\u{1E149}'),
    ('\u{1E2F0}', '\u{1E2F9}'), ('\u{1E4F0}', '\u{1E4F9}'), ('\u{1E950}', '\u{1E959}'),
    ('\u{1FBF0}', '\u{1FBF9}'),
];

/// Checks if a character is a decimal digit in any script.
///
/// Covers the Unicode `Nd` category, so Arabic-Indic or fullwidth digits
/// count while fractions and Roman numerals do not.
///
/// # Example
///
/// ```
/// use povc_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('\u{663}')); // Arabic-Indic three
/// assert!(!is_digit('\u{bd}')); // one half
/// ```
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    DECIMAL_DIGITS
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Checks if a character may start a word.
///
/// Anything that is neither blank nor punctuation qualifies, including
/// digits, `/`, `-` and non-ASCII letters.
///
/// # Example
///
/// ```
/// use povc_lex::unicode::is_word_start;
///
/// assert!(is_word_start('s'));
/// assert!(is_word_start('4'));
/// assert!(is_word_start('-'));
/// assert!(!is_word_start('<'));
/// assert!(!is_word_start('\t'));
/// ```
#[inline]
pub fn is_word_start(c: char) -> bool {
    !is_blank(c) && !is_punctuation(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_are_blank() {
        for c in ['\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}'] {
            assert!(is_blank(c), "{:?}", c);
        }
    }

    #[test]
    fn test_non_breaking_spaces_are_not_blank() {
        for c in ['\u{85}', '\u{A0}', '\u{2007}', '\u{202F}'] {
            assert!(!is_blank(c), "{:?}", c);
        }
    }

    #[test]
    fn test_unicode_spaces_are_blank() {
        for c in ['\u{1680}', '\u{2000}', '\u{2028}', '\u{2029}', '\u{3000}'] {
            assert!(is_blank(c), "{:?}", c);
        }
    }

    #[test]
    fn test_operators_are_punctuation() {
        for &c in OPERATORS {
            assert!(is_punctuation(c));
        }
        assert!(!is_operator('/'));
        assert!(!is_punctuation('/'));
    }

    #[test]
    fn test_directive_prefix_is_punctuation() {
        assert!(is_punctuation(DIRECTIVE_PREFIX));
        assert!(!is_word_start(DIRECTIVE_PREFIX));
    }

    #[test]
    fn test_digits_cover_every_script() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(is_digit('٣')); // Arabic-Indic three
        assert!(is_digit('\u{ff15}')); // fullwidth five
        assert!(is_digit('\u{1d7ce}')); // mathematical bold zero
        assert!(!is_digit('a'));
        assert!(!is_digit('\u{2167}')); // Roman numeral eight
        assert!(!is_digit('\u{b2}')); // superscript two
    }

    #[test]
    fn test_digit_blocks_are_sorted() {
        for pair in DECIMAL_DIGITS.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
