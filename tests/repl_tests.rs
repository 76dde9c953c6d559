//! Integration tests for REPL functionality

#[cfg(feature = "cli")]
mod repl_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use fitlex::matcher::Pass;
    use fitlex::repl::{Command, CommandResult, ReplState};

    fn run(state: &mut ReplState, line: &str) -> String {
        match Command::parse(line).unwrap().execute(state).unwrap() {
            CommandResult::Continue(output) => output,
            CommandResult::Silent => String::new(),
            CommandResult::Exit => "<exit>".to_string(),
        }
    }

    #[test]
    fn test_parse_suggest_command() {
        let cmd = Command::parse("suggest  bench press").unwrap();
        match cmd {
            Command::Suggest { query } => assert_eq!(query, "bench press"),
            _ => panic!("Wrong command type"),
        }
        assert!(Command::parse("suggest").is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(Command::parse("s plank").unwrap(), Command::Suggest { .. }));
        assert!(matches!(Command::parse("find plank").unwrap(), Command::Search { .. }));
        assert!(matches!(Command::parse("feat").unwrap(), Command::Featured { .. }));
        assert!(matches!(Command::parse("info").unwrap(), Command::Stats));
        assert!(matches!(Command::parse("set").unwrap(), Command::Settings));
        assert!(matches!(Command::parse("quit").unwrap(), Command::Exit));
        assert!(matches!(Command::parse("?").unwrap(), Command::Help { topic: None }));
    }

    #[test]
    fn test_parse_match_passes() {
        match Command::parse("match Bencch Pres").unwrap() {
            Command::Match { query, pass } => {
                assert_eq!(query, "Bencch Pres");
                assert_eq!(pass, Some(Pass::Primary));
            }
            _ => panic!("Wrong command type"),
        }
        match Command::parse("m --fallback dedlfit").unwrap() {
            Command::Match { pass, .. } => assert_eq!(pass, Some(Pass::Fallback)),
            _ => panic!("Wrong command type"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("frobnicate").is_err());
        assert!(Command::parse("limit many").is_err());
        assert!(Command::parse("show-distances maybe").is_err());
        assert!(Command::parse("load").is_err());
    }

    #[test]
    fn test_match_respects_show_distances() {
        colored::control::set_override(false);
        let mut state = ReplState::new();

        assert_eq!(run(&mut state, "match Bencch Pres"), "Did you mean: Bench Press");
        run(&mut state, "show-distances on");
        assert_eq!(
            run(&mut state, "match Bencch Pres"),
            "Did you mean: Bench Press (distance: 2)"
        );
        assert_eq!(run(&mut state, "match dip"), "No suggestion");
    }

    #[test]
    fn test_limit_changes_suggestions() {
        colored::control::set_override(false);
        let mut state = ReplState::new();

        run(&mut state, "limit 2");
        let output = run(&mut state, "suggest bench");
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Bench Dips"));
    }

    #[test]
    fn test_load_corpus_and_catalog() {
        colored::control::set_override(false);
        let temp_dir = TempDir::new().unwrap();
        let corpus_path = temp_dir.path().join("names.txt");
        let catalog_path = temp_dir.path().join("catalog.json");
        fs::write(&corpus_path, "Kettlebell Swing\nKettlebell Snatch\n").unwrap();
        fs::write(
            &catalog_path,
            r#"[{"name": "Kettlebell Swing", "muscleGroup": "Posterior Chain", "type": "Power", "description": "Hinge and snap."}]"#,
        )
        .unwrap();

        let mut state = ReplState::new();
        run(&mut state, &format!("load {}", corpus_path.display()));
        run(&mut state, &format!("catalog {}", catalog_path.display()));

        assert_eq!(state.session.corpus().len(), 2);
        assert_eq!(
            run(&mut state, "search kettlebell swing"),
            "Kettlebell Swing [Power / Posterior Chain]\nHinge and snap."
        );
        assert_eq!(
            run(&mut state, "search Kettlebel Snach"),
            "Did you mean? Kettlebell Snatch"
        );

        run(&mut state, "load builtin");
        assert!(state.session.corpus().len() > 2);
    }

    #[test]
    fn test_save_writes_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut state = ReplState::new();
        state.config_file_path = Some(config_path.clone());
        run(&mut state, "limit 3");
        run(&mut state, "save");

        let saved = fitlex::cli::paths::PersistentConfig::load_from(Some(config_path.as_path())).unwrap();
        assert_eq!(saved.match_config().suggestion_limit, 3);
    }

    #[test]
    fn test_exit() {
        let mut state = ReplState::new();
        assert_eq!(run(&mut state, "exit"), "<exit>");
    }
}
