#[cfg(test)]
mod tests {
    use textclean::transforms::Transform;
    use textclean::{
        AdditionalCleaning, Cell, Column, Lowercase, RemoveDigit, RemoveEmail, RemoveEmoji,
        RemoveHashtag, RemoveHtml, RemoveMention, RemovePlural, RemovePunctuation,
        RemoveSingleCharacter, RemoveSpace, RemoveUrl, RemoveWhitespace, WordDetokenize,
        WordTokenize,
    };

    fn column(values: &[&str]) -> Column {
        Column::from_strings("text", values.to_vec())
    }

    fn texts(column: &Column) -> Vec<String> {
        column
            .texts()
            .unwrap()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn every_text_transform_preserves_row_count() {
        let input = column(&["Hello World 1", "second ROW", "third row here"]);
        let transforms: Vec<Box<dyn Transform>> = vec![
            Box::new(Lowercase),
            Box::new(RemovePunctuation),
            Box::new(RemoveUrl),
            Box::new(RemoveHtml),
            Box::new(RemoveEmail),
            Box::new(RemoveDigit),
            Box::new(RemoveSpace),
            Box::new(RemoveWhitespace),
            Box::new(RemoveMention),
            Box::new(RemoveHashtag),
            Box::new(RemoveEmoji),
            Box::new(AdditionalCleaning::new()),
            Box::new(RemoveSingleCharacter),
            Box::new(RemovePlural::new()),
        ];

        for transform in &transforms {
            let out = transform.apply(&input).unwrap();
            assert_eq!(out.len(), input.len(), "{} changed row count", transform.name());
        }
    }

    #[test]
    fn lowercase_is_idempotent() {
        let once = Lowercase.apply(&column(&["MiXeD Case É"])).unwrap();
        let twice = Lowercase.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn url_removal_leaves_surrounding_spacing_alone() {
        let out = RemoveUrl.apply(&column(&["see http://example.com now"])).unwrap();
        assert_eq!(texts(&out), vec!["see  now"]);
    }

    #[test]
    fn www_urls_are_also_removed() {
        let out = RemoveUrl.apply(&column(&["go to WWW.example.com please"])).unwrap();
        assert_eq!(texts(&out), vec!["go to  please"]);
    }

    #[test]
    fn html_tags_are_stripped_non_greedily() {
        let out = RemoveHtml.apply(&column(&["<p>keep</p> <br/>this"])).unwrap();
        assert_eq!(texts(&out), vec!["keep this"]);
    }

    #[test]
    fn email_addresses_are_stripped() {
        let out = RemoveEmail
            .apply(&column(&["write to First.Last+tag@example.co.uk today"]))
            .unwrap();
        assert_eq!(texts(&out), vec!["write to  today"]);
    }

    #[test]
    fn digit_runs_are_stripped_whole() {
        let out = RemoveDigit.apply(&column(&["room 42b"])).unwrap();
        assert_eq!(texts(&out), vec!["room b"]);
    }

    #[test]
    fn mentions_and_hashtags_are_stripped() {
        let mentions = RemoveMention.apply(&column(&["thanks @alice !"])).unwrap();
        assert_eq!(texts(&mentions), vec!["thanks  !"]);

        let hashtags = RemoveHashtag.apply(&column(&["great #day today"])).unwrap();
        assert_eq!(texts(&hashtags), vec!["great  today"]);
    }

    #[test]
    fn emoji_are_stripped() {
        let out = RemoveEmoji.apply(&column(&["so happy \u{1F600} today \u{2764}\u{FE0F}"])).unwrap();
        assert_eq!(texts(&out), vec!["so happy  today "]);
    }

    #[test]
    fn whitespace_runs_collapse_to_one_space() {
        let out = RemoveWhitespace
            .apply(&column(&["a  b\t\tc\n\nd", "already clean"]))
            .unwrap();
        for text in texts(&out) {
            assert!(!text.contains("  "), "double space survived in '{text}'");
        }
        assert_eq!(texts(&out)[0], "a b c d");
    }

    #[test]
    fn trim_removes_only_outer_whitespace() {
        let out = RemoveSpace.apply(&column(&["  padded inner  text  "])).unwrap();
        assert_eq!(texts(&out), vec!["padded inner  text"]);
    }

    #[test]
    fn punctuation_removal_spaces_out_dashes_and_apostrophes() {
        let out = RemovePunctuation
            .apply(&column(&["don't stop–ever, ok?!"]))
            .unwrap();
        assert_eq!(texts(&out), vec!["don t stop ever ok"]);
    }

    #[test]
    fn additional_cleaning_takes_caller_patterns() {
        let transform = AdditionalCleaning::with_patterns(&["foo"]).unwrap();
        let out = transform.apply(&column(&["a\tFOO…b™"])).unwrap();
        assert_eq!(texts(&out), vec!["ab"]);
    }

    #[test]
    fn no_single_character_tokens_survive() {
        let out = RemoveSingleCharacter
            .apply(&column(&["a bb c ddd e", "x", "fine words"]))
            .unwrap();
        for text in texts(&out) {
            assert!(
                text.split(' ').all(|w| w.is_empty() || w.chars().count() > 1),
                "single-character token survived in '{text}'"
            );
        }
        assert_eq!(texts(&out)[0], "bb ddd");
    }

    #[test]
    fn plural_s_is_stripped_from_long_words_only() {
        let out = RemovePlural::new()
            .apply(&column(&["dogs decisions horses"]))
            .unwrap();
        // "dogs" is short enough to keep its s at the default threshold.
        assert_eq!(texts(&out), vec!["dogs decision horse"]);

        let aggressive = RemovePlural::new()
            .word_length(3)
            .apply(&column(&["dogs decisions horses"]))
            .unwrap();
        assert_eq!(texts(&aggressive), vec!["dog decision horse"]);
    }

    #[test]
    fn tokenize_then_detokenize_is_identity_on_clean_text() {
        let input = column(&["one two three", "single"]);
        let tokens = WordTokenize.apply(&input).unwrap();
        let back = WordDetokenize.apply(&tokens).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn tokenize_splits_on_single_literal_space() {
        let tokens = WordTokenize.apply(&column(&["a  b"])).unwrap();
        assert_eq!(
            tokens.cells[0],
            Cell::Tokens(vec!["a".into(), "".into(), "b".into()])
        );
    }

    #[test]
    fn text_transforms_reject_token_cells() {
        let tokens = WordTokenize.apply(&column(&["a b"])).unwrap();
        assert!(Lowercase.apply(&tokens).is_err());
        assert!(RemovePunctuation.apply(&tokens).is_err());
    }
}
