//! Edge case tests for povc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Keyword, Lexer, TokenKind};

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    fn single(source: &str) -> (TokenKind, &str) {
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 1, "{:?}", tokens);
        tokens[0]
    }

    // ==================== STREAM PROPERTIES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(Lexer::new("").next_token().is_none());
    }

    #[test]
    fn test_edge_tokens_are_never_empty() {
        let source = "#if (A = 1) sphere{<0,0,0>,1} #end // done\n\"s\" /* c */ x.y";
        for token in tokenize(source) {
            assert!(!token.text.is_empty());
            assert_eq!(token.span.len(), token.text.len());
            assert_eq!(&source[token.span.range()], token.text);
        }
    }

    #[test]
    fn test_edge_every_keyword_round_trips() {
        for &keyword in Keyword::ALL {
            assert_eq!(
                single(keyword.as_str()),
                (TokenKind::Keyword, keyword.as_str()),
                "{}",
                keyword
            );
        }
    }

    // ==================== WORDS AND NUMBERS ====================

    #[test]
    fn test_edge_identifier_fallback() {
        assert_eq!(single("foobar123x"), (TokenKind::Identifier, "foobar123x"));
    }

    #[test]
    fn test_edge_number_vs_identifier() {
        assert_eq!(single("42"), (TokenKind::Number, "42"));
        assert_eq!(single("42x"), (TokenKind::Identifier, "42x"));
    }

    #[test]
    fn test_edge_non_ascii_digits_are_number() {
        assert_eq!(single("\u{663}\u{664}"), (TokenKind::Number, "\u{663}\u{664}"));
        assert_eq!(single("\u{ff11}2"), (TokenKind::Number, "\u{ff11}2"));
        assert_eq!(single("\u{663}x"), (TokenKind::Identifier, "\u{663}x"));
    }

    #[test]
    fn test_edge_control_characters_around_keyword() {
        assert_eq!(single("\u{1}sphere"), (TokenKind::Keyword, "\u{1}sphere"));
        assert_eq!(single("box\u{7}"), (TokenKind::Keyword, "box\u{7}"));
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        assert_eq!(single("SPHERE"), (TokenKind::Identifier, "SPHERE"));
    }

    #[test]
    fn test_edge_decimal_point_splits_number() {
        assert_eq!(
            lex_all("1.2.3"),
            vec![
                (TokenKind::Number, "1"),
                (TokenKind::Other, "."),
                (TokenKind::Number, "2"),
                (TokenKind::Other, "."),
                (TokenKind::Number, "3"),
            ]
        );
    }

    #[test]
    fn test_edge_word_keeps_slashes_and_dashes() {
        assert_eq!(single("a/b"), (TokenKind::Identifier, "a/b"));
        assert_eq!(single("x//y"), (TokenKind::Identifier, "x//y"));
        assert_eq!(single("-5"), (TokenKind::Identifier, "-5"));
    }

    #[test]
    fn test_edge_lone_slash_is_word() {
        assert_eq!(single("/"), (TokenKind::Identifier, "/"));
    }

    #[test]
    fn test_edge_non_breaking_space_is_part_of_word() {
        assert_eq!(single("a\u{a0}b"), (TokenKind::Identifier, "a\u{a0}b"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        assert_eq!(single(&name), (TokenKind::Identifier, name.as_str()));
    }

    // ==================== COMMENTS ====================

    #[test]
    fn test_edge_block_comment_inclusive() {
        assert_eq!(single("/* hi */"), (TokenKind::Comment, "/* hi */"));
    }

    #[test]
    fn test_edge_line_comment_keeps_newline() {
        assert_eq!(
            lex_all("// x\ny"),
            vec![(TokenKind::Comment, "// x\n"), (TokenKind::Identifier, "y")]
        );
    }

    #[test]
    fn test_edge_line_comment_at_end_of_input() {
        assert_eq!(single("// x"), (TokenKind::Comment, "// x"));
    }

    #[test]
    fn test_edge_slash_star_slash_is_closed() {
        assert_eq!(single("/*/"), (TokenKind::Comment, "/*/"));
    }

    #[test]
    fn test_edge_comment_swallows_braces() {
        assert_eq!(
            lex_all("/* { < ( */}"),
            vec![(TokenKind::Comment, "/* { < ( */"), (TokenKind::BlockClose, "}")]
        );
    }

    #[test]
    fn test_edge_unterminated_comment() {
        assert_eq!(single("/* open"), (TokenKind::Comment, "/* open"));
    }

    #[test]
    fn test_edge_multiline_comment_advances_lines() {
        let tokens = tokenize("/* a\nb\n*/x");
        assert_eq!(tokens[1].text, "x");
        assert_eq!((tokens[1].span.line, tokens[1].span.column), (3, 3));
    }

    // ==================== BRACKETED SPANS ====================

    #[test]
    fn test_edge_vector_span() {
        assert_eq!(single("<1,2,3>"), (TokenKind::Vector, "<1,2,3>"));
    }

    #[test]
    fn test_edge_unterminated_vector() {
        assert_eq!(single("<1, 2"), (TokenKind::Vector, "<1, 2"));
    }

    #[test]
    fn test_edge_string_with_punctuation() {
        assert_eq!(single("\"a;b{c}\""), (TokenKind::String, "\"a;b{c}\""));
    }

    #[test]
    fn test_edge_unterminated_string() {
        assert_eq!(single("\"abc"), (TokenKind::String, "\"abc"));
    }

    #[test]
    fn test_edge_empty_argument_list() {
        assert_eq!(single("()"), (TokenKind::ArgumentList, "()"));
    }

    #[test]
    fn test_edge_stray_closers_are_other() {
        assert_eq!(
            lex_all(")>"),
            vec![(TokenKind::Other, ")"), (TokenKind::Other, ">")]
        );
    }

    // ==================== SINGLE CHARACTERS ====================

    #[test]
    fn test_edge_single_char_blocks() {
        assert_eq!(single("{"), (TokenKind::BlockOpen, "{"));
        assert_eq!(single("}"), (TokenKind::BlockClose, "}"));
        assert_eq!(
            lex_all("{}"),
            vec![(TokenKind::BlockOpen, "{"), (TokenKind::BlockClose, "}")]
        );
    }

    #[test]
    fn test_edge_operators_do_not_merge() {
        assert_eq!(
            lex_all("**"),
            vec![(TokenKind::Operator, "*"), (TokenKind::Operator, "*")]
        );
        assert_eq!(
            lex_all("*/"),
            vec![(TokenKind::Operator, "*"), (TokenKind::Identifier, "/")]
        );
    }

    #[test]
    fn test_edge_separators_are_whitespace() {
        assert_eq!(single(",\r\n\t"), (TokenKind::Whitespace, ",\r\n\t"));
        assert_eq!(
            lex_all(";;"),
            vec![(TokenKind::Whitespace, ";"), (TokenKind::Whitespace, ";")]
        );
    }

    // ==================== DIRECTIVES ====================

    #[test]
    fn test_edge_directive_prefix() {
        assert_eq!(
            lex_all("#declare x"),
            vec![
                (TokenKind::DirectivePrefix, "#declare"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_edge_directive_runs_to_blank() {
        assert_eq!(single("#if(A)"), (TokenKind::DirectivePrefix, "#if(A)"));
        assert_eq!(single("#"), (TokenKind::DirectivePrefix, "#"));
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_coverage() {
        use proptest::prelude::*;

        proptest!(|(input in "(?s).{0,200}")| {
            let rebuilt: String = tokenize(&input).iter().map(|t| t.text).collect();
            assert_eq!(rebuilt, input);
        });
    }

    #[test]
    fn test_property_coverage_scene_alphabet() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9_ \n\t/*<>(){}#\";:,.+=-]{0,200}")| {
            let tokens = tokenize(&input);
            let rebuilt: String = tokens.iter().map(|t| t.text).collect();
            assert_eq!(rebuilt, input);
            for pair in tokens.windows(2) {
                assert_eq!(pair[0].span.end, pair[1].span.start);
            }
        });
    }

    #[test]
    fn test_property_termination() {
        use proptest::prelude::*;

        proptest!(|(input in "(?s).{0,200}")| {
            let count = tokenize(&input).len();
            assert!(count <= input.chars().count());
        });
    }
}
