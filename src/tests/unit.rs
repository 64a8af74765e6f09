#[cfg(test)]
mod unit_tests {

    use crate::{
        Analyzer, AnalyzerError, CliticError, Context, LowerCase, Profile, Stage, StageError, Stem,
        StripClitics, preset, process::DynamicProcess,
    };
    use std::borrow::Cow;

    struct Reject;

    impl Stage for Reject {
        fn name(&self) -> &'static str {
            "reject"
        }

        fn needs_apply(&self, token: &str, _ctx: &Context) -> Result<bool, StageError> {
            Ok(token.contains('x'))
        }

        fn apply<'a>(&self, token: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed(self.name(), format!("`{token}` contains x")))
        }
    }

    #[test]
    fn lowercase_keeps_order_and_drops_punctuation() {
        let analyzer = Analyzer::builder().add_stage(LowerCase).build();
        let out = analyzer.analyze("Bouônjour, mes anmîns!").unwrap();
        assert_eq!(out, ["bouônjour", "mes", "anmîns"]);
    }

    #[test]
    fn zero_copy_when_already_lower() {
        let analyzer = Analyzer::builder().add_stage(LowerCase).build();
        let input = "maison";
        let out = analyzer.analyze(input).unwrap();
        assert!(matches!(&out[0], Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn no_stages_returns_raw_tokens() {
        let analyzer = Analyzer::builder().build();
        assert_eq!(analyzer.analyze("qu'importe").unwrap(), ["qu", "importe"]);
        assert_eq!(analyzer.tokenize("qu'importe"), ["qu", "importe"]);
    }

    #[test]
    fn emptied_tokens_are_dropped() {
        let analyzer = Analyzer::builder()
            .add_stage(LowerCase)
            .add_stage(StripClitics)
            .build();
        assert_eq!(analyzer.analyze("L'affaithe").unwrap(), ["affaithe"]);
        assert!(analyzer.analyze("qu' j' t'").unwrap().is_empty());
    }

    #[test]
    fn builder_no_break() {
        let analyzer = Analyzer::builder()
            .no_break("l", "l'affaithe")
            .unwrap()
            .build();
        assert!(!analyzer.context().is_shared());
        assert_eq!(analyzer.analyze("l'affaithe").unwrap(), ["l'affaithe"]);
    }

    #[test]
    fn builder_allow_break() {
        let analyzer = Analyzer::builder()
            .allow_break("d", "d'mander")
            .unwrap()
            .build();
        assert_eq!(analyzer.tokenize("d'mander"), ["d", "mander"]);
        assert_eq!(Analyzer::builder().build().tokenize("d'mander"), ["d'mander"]);
    }

    #[test]
    fn builder_rejects_unknown_marker() {
        let err = Analyzer::builder().no_break("qu", "qu'est").err().unwrap();
        assert!(matches!(
            err,
            AnalyzerError::Clitic(CliticError::UnknownMarker(ref m)) if m == "qu"
        ));
    }

    #[test]
    fn stage_error_surfaces() {
        let analyzer = Analyzer::builder().add_stage(Reject).build();
        assert_eq!(analyzer.analyze("bouônjour").unwrap(), ["bouônjour"]);
        let err = analyzer.analyze("bouônjour box").unwrap_err();
        assert!(matches!(err, AnalyzerError::Stage(StageError::Failed("reject", _))));
        assert!(err.to_string().contains("`box` contains x"));
    }

    #[test]
    fn profile_error_names_profile() {
        let profile = Profile::dynamic("strict", DynamicProcess::new().push(Reject));
        let analyzer = Analyzer::builder().build();
        let err = analyzer.analyze_with_profile(&profile, "box").unwrap_err();
        assert!(matches!(err, AnalyzerError::Profile(_)));
        assert!(err.to_string().contains("strict"));
        assert!(err.to_string().contains("`box`"));
    }

    #[test]
    fn analyzer_and_profile_share_the_token_loop() {
        let analyzer = Analyzer::builder()
            .add_stage(LowerCase)
            .add_stage(StripClitics)
            .add_stage(Stem)
            .build();
        assert_eq!(
            analyzer.stage_names().collect::<Vec<_>>(),
            ["lower_case", "strip_clitics", "stem"]
        );
        let text = "Qu'les chevaux d'mandent l'affaithe";
        assert_eq!(
            analyzer.analyze(text).unwrap(),
            analyzer.analyze_with_profile(&preset::search(), text).unwrap()
        );
    }

    #[test]
    fn search_preset() {
        let analyzer = Analyzer::builder().build();
        let out = analyzer
            .analyze_with_profile(&preset::search(), "L'affaithe des chevaux")
            .unwrap();
        assert_eq!(out, ["affaith", "de", "cheval"]);
    }

    #[test]
    fn lexical_preset_keeps_clitics() {
        let analyzer = Analyzer::builder().build();
        let out = analyzer
            .analyze_with_profile(&preset::lexical(), "Qu'Importe")
            .unwrap();
        assert_eq!(out, ["qu", "importe"]);
    }

    #[test]
    fn stem_stage_alone() {
        let analyzer = Analyzer::builder().add_stage(Stem).build();
        assert_eq!(analyzer.analyze("bateaux chevaux").unwrap(), ["bateau", "cheval"]);
    }
}
