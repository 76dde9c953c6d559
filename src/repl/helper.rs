//! Rustyline helper integration
//!
//! Provides completion, hinting, highlighting, and validation for the REPL.
//! Exercise names complete from the same ranking the search box uses.

use super::command::NAME_COMMANDS;
use super::highlighter::CommandHighlighter;
use crate::corpus::Corpus;
use crate::distance::fold;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper
pub struct FitlexHelper {
    highlighter: CommandHighlighter,
    hinter: HistoryHinter,
    commands: Vec<String>,
    corpus: Corpus,
    limit: usize,
}

impl FitlexHelper {
    /// Create a new helper completing names from `corpus`
    pub fn new(corpus: Corpus, limit: usize) -> Self {
        Self {
            highlighter: CommandHighlighter::new(),
            hinter: HistoryHinter::new(),
            commands: vec![
                "suggest",
                "match",
                "search",
                "featured",
                "distance",
                "load",
                "catalog",
                "limit",
                "show-distances",
                "stats",
                "settings",
                "save",
                "help",
                "exit",
                "quit",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            corpus,
            limit,
        }
    }

    /// Swap the corpus after a `load`
    pub fn set_corpus(&mut self, corpus: Corpus) {
        self.corpus = corpus;
    }

    /// Swap the suggestion limit after a `limit`
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Byte offset where the name argument starts, if the line is a name
    /// command with a non-empty argument
    fn name_argument(line: &str) -> Option<usize> {
        let (cmd, rest) = line.trim_start().split_once(char::is_whitespace)?;
        if !NAME_COMMANDS.contains(&cmd.to_lowercase().as_str()) {
            return None;
        }
        let mut args = rest.trim_start();
        // Skip match flags
        while let Some(flag) = ["--fallback", "--raw", "-f", "-r"]
            .into_iter()
            .find(|f| args.starts_with(f) && args[f.len()..].starts_with(char::is_whitespace))
        {
            args = args[flag.len()..].trim_start();
        }
        if args.trim().is_empty() {
            return None;
        }
        Some(line.len() - args.len())
    }

    /// Remainder of the top suggestion for a partially typed name.
    fn name_hint(&self, typed: &str) -> Option<String> {
        let top = self.corpus.rank(typed, 1).into_iter().next()?;
        // Only a prefix hit can be completed inline
        if !fold(top).starts_with(&fold(typed)) {
            return None;
        }
        // Trailing spaces the entry does not share are not part of the prefix
        let rest: String = if top.to_lowercase().starts_with(&typed.to_lowercase()) {
            top.chars().skip(typed.chars().count()).collect()
        } else {
            let skip = typed.trim_end().chars().count();
            top.chars().skip(skip).collect::<String>().trim_start().to_string()
        };
        Some(rest).filter(|r| !r.is_empty())
    }
}

impl Helper for FitlexHelper {}

impl Completer for FitlexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];

        if let Some(start) = Self::name_argument(line) {
            let candidates = self
                .corpus
                .rank(&line[start..], self.limit)
                .into_iter()
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Ok((start, candidates));
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let start = line.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);

        // Command completion if still typing first word
        if parts.len() <= 1 && !line.ends_with(char::is_whitespace) {
            let prefix = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(&prefix))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                })
                .collect();
            return Ok((start, candidates));
        }

        match parts[0].to_lowercase().as_str() {
            "show-distances" | "show-dist" if parts.len() <= 2 => {
                let prefix = parts.get(1).map(|s| s.to_lowercase()).unwrap_or_default();
                let candidates = ["on", "off"]
                    .iter()
                    .filter(|o| o.starts_with(&prefix))
                    .map(|o| Pair {
                        display: o.to_string(),
                        replacement: o.to_string(),
                    })
                    .collect();
                Ok((start, candidates))
            }
            "help" | "?" if parts.len() <= 2 => {
                let prefix = parts.get(1).map(|s| s.to_lowercase()).unwrap_or_default();
                let candidates = self
                    .commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(&prefix))
                    .map(|cmd| Pair {
                        display: cmd.clone(),
                        replacement: cmd.clone(),
                    })
                    .collect();
                Ok((start, candidates))
            }
            _ => Ok((0, vec![])),
        }
    }
}

impl Hinter for FitlexHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        if pos == line.len() {
            if let Some(start) = Self::name_argument(line) {
                return self.name_hint(&line[start..]);
            }
        }
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for FitlexHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

impl Validator for FitlexHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Always accept input (validation happens during execution)
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_argument_offsets() {
        assert_eq!(FitlexHelper::name_argument("search bench"), Some(7));
        assert_eq!(FitlexHelper::name_argument("match -f dedl"), Some(9));
        assert_eq!(FitlexHelper::name_argument("search "), None);
        assert_eq!(FitlexHelper::name_argument("limit 5"), None);
        assert_eq!(FitlexHelper::name_argument("search"), None);
    }

    #[test]
    fn test_name_hint_completes_prefix() {
        let helper = FitlexHelper::new(Corpus::from_names(["Bench Dips", "Bench Press"]), 10);
        assert_eq!(helper.name_hint("bench "), Some("Dips".to_string()));
        assert_eq!(helper.name_hint("bench"), Some(" Dips".to_string()));
        assert_eq!(helper.name_hint("bench  "), Some("Dips".to_string()));
        assert_eq!(helper.name_hint("bench d"), Some("ips".to_string()));
        assert_eq!(helper.name_hint("dips"), None);
    }
}
