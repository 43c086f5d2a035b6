#[cfg(test)]
mod tests {
    use textclean::{
        standard_pipeline, Cell, CleanConfig, Column, ColumnRunner, Dataset, Language, Lemmatize,
        Lowercase, RemoveAccent, RemoveStopwords, RemoveWhitespace, Resource, RuleTable,
        StaticResourceLoader, Stemmatize, WordCountFilter, WordTokenize,
    };

    fn loader() -> StaticResourceLoader {
        StaticResourceLoader::new()
            .with_table(
                Resource::Stopwords(Language::English),
                RuleTable::List(vec!["the".into(), "a".into(), "is".into(), "to".into()]),
            )
            .with_table(
                Resource::Stopwords(Language::French),
                RuleTable::List(vec!["le".into(), "la".into(), "les".into()]),
            )
            .with_table(
                Resource::Lemmas(Language::English),
                RuleTable::Pairs(vec![
                    ("mice".into(), "mouse".into()),
                    ("took".into(), "take".into()),
                ]),
            )
            .with_table(
                Resource::Stems(Language::English),
                RuleTable::List(vec!["ing\\b".into(), "ed\\b".into()]),
            )
            .with_table(
                Resource::Accents,
                RuleTable::Pairs(vec![("é".into(), "e".into()), ("à".into(), "a".into())]),
            )
    }

    #[test]
    fn chained_transforms_rewrite_only_the_bound_column() {
        let data = Dataset::new(vec![
            Column::from_strings("review", vec!["  GREAT   Product  ", "BAD   one"]),
            Column::from_strings("author", vec!["Ann", "Ben"]),
        ])
        .unwrap();

        let out = ColumnRunner::new(data, "review")
            .unwrap()
            .apply(&Lowercase)
            .unwrap()
            .apply(&RemoveWhitespace)
            .unwrap()
            .finish();

        assert_eq!(
            out.column("review").unwrap().texts().unwrap(),
            vec![" great product ", "bad one"]
        );
        assert_eq!(
            out.column("author").unwrap().texts().unwrap(),
            vec!["Ann", "Ben"]
        );
    }

    #[test]
    fn word_count_filter_drops_rows_across_all_columns() {
        let data = Dataset::new(vec![
            Column::from_strings("text", vec!["a b c", "a", "a b"]),
            Column::new(
                "id",
                vec![
                    Cell::Other(serde_json::json!(10)),
                    Cell::Other(serde_json::json!(20)),
                    Cell::Other(serde_json::json!(30)),
                ],
            ),
        ])
        .unwrap();

        let out = ColumnRunner::new(data, "text")
            .unwrap()
            .filter(&WordCountFilter::new())
            .unwrap()
            .finish();

        assert_eq!(out.row_count(), 1);
        assert_eq!(out.column("text").unwrap().texts().unwrap(), vec!["a b c"]);
        assert_eq!(
            out.column("id").unwrap().cells,
            vec![Cell::Other(serde_json::json!(10))]
        );
    }

    #[test]
    fn added_stopwords_are_removed_even_if_absent_from_the_base_list() {
        let stopwords = RemoveStopwords::new(loader()).extra(vec!["today"]);
        let out = ColumnRunner::from_series("text", vec!["the news today is good"])
            .apply(&stopwords)
            .unwrap()
            .finish();
        assert_eq!(
            out.column("text").unwrap().texts().unwrap(),
            vec!["news good"]
        );
    }

    #[test]
    fn french_stopwords_use_the_french_table() {
        let stopwords = RemoveStopwords::new(loader()).language(Language::French);
        let out = ColumnRunner::from_series("text", vec!["le chat et la souris"])
            .apply(&stopwords)
            .unwrap()
            .finish();
        assert_eq!(
            out.column("text").unwrap().texts().unwrap(),
            vec!["chat et souris"]
        );
    }

    #[test]
    fn unsupported_language_fails_before_any_row_is_touched() {
        assert!("german".parse::<Language>().is_err());
    }

    #[test]
    fn lemmatize_and_stemmatize_compose() {
        let out = ColumnRunner::from_series("text", vec!["Mice took the cheese"])
            .apply(&Lemmatize::new(loader()))
            .unwrap()
            .apply(&Stemmatize::new(loader()))
            .unwrap()
            .finish();
        assert_eq!(
            out.column("text").unwrap().texts().unwrap(),
            vec!["mouse take the cheese"]
        );
    }

    #[test]
    fn accent_removal_uses_the_fetched_map() {
        let out = ColumnRunner::from_series("text", vec!["Déjà vu"])
            .apply(&RemoveAccent::new(loader()))
            .unwrap()
            .finish();
        assert_eq!(out.column("text").unwrap().texts().unwrap(), vec!["deja vu"]);
    }

    #[test]
    fn filter_rejects_token_cells_without_dropping_anything() {
        let tokens = WordTokenize;
        let runner = ColumnRunner::from_series("text", vec!["a b c"])
            .apply(&tokens)
            .unwrap();
        assert!(runner.filter(&WordCountFilter::new()).is_err());
    }

    #[test]
    fn standard_pipeline_cleans_end_to_end() {
        let data = Dataset::from_series(
            "review",
            vec!["Check https://example.com  — the BEST product!! #ad @seller 2024"],
        );
        let out = standard_pipeline(data, "review", &CleanConfig::default(), loader()).unwrap();
        assert_eq!(
            out.column("review").unwrap().texts().unwrap(),
            vec!["check best product"]
        );
    }
}
