//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::ReplState;
use crate::commands::handlers::{correct, search, suggest};
use crate::commands::{MatchParams, SuggestParams};
use crate::distance::folded_distance;
use crate::matcher::Pass;
use crate::search::NO_FEATURED_MESSAGE;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rank autocomplete suggestions: suggest <text>
    Suggest {
        /// Live query
        query: String,
    },
    /// Closest corpus entry: match [--fallback|--raw] <text>
    Match {
        /// Finalized query
        query: String,
        /// Pass to apply, `None` for the raw scan
        pass: Option<Pass>,
    },
    /// Submit a query to the catalogue: search <text>
    Search {
        /// Finalized query
        query: String,
    },
    /// Filter featured exercises: featured [text]
    Featured {
        /// Raw filter text
        query: String,
    },
    /// Case-insensitive edit distance: distance <a>, <b>
    Distance {
        /// First name
        source: String,
        /// Second name
        target: String,
    },
    /// Load a corpus file: load <path> | load builtin
    Load {
        /// Corpus file, `None` for the built-in catalogue
        path: Option<PathBuf>,
    },
    /// Load a detail catalogue: catalog <path>
    Catalog {
        /// Catalogue file
        path: PathBuf,
    },
    /// Set suggestion limit: limit <n>
    Limit {
        /// Suggestion limit
        limit: usize,
    },
    /// Toggle distance display: show-distances [on|off]
    ShowDistances {
        /// Enable or disable distance display
        enable: Option<bool>,
    },
    /// Show statistics: stats | info
    Stats,
    /// Show settings: settings
    Settings,
    /// Persist settings: save
    Save,
    /// Show help: help [command]
    Help {
        /// Help topic
        topic: Option<String>,
    },
    /// Exit REPL: exit | quit
    Exit,
}

/// Command result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Continue REPL
    Continue(String),
    /// Exit REPL
    Exit,
    /// No output
    Silent,
}

/// Commands whose argument is an exercise name, completed from the corpus
pub const NAME_COMMANDS: &[&str] = &["suggest", "s", "match", "m", "search", "find"];

/// Text after the command word, with inner spacing preserved
fn remainder(input: &str) -> &str {
    input
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest)
        .unwrap_or("")
}

impl Command {
    /// Parse command from input string
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim_start();

        if input.trim().is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let rest = remainder(input);

        match cmd.as_str() {
            "suggest" | "s" => Ok(Self::Suggest {
                query: Self::require_text(rest, "suggest <text>")?,
            }),
            "match" | "m" => Self::parse_match(&parts[1..], rest),
            "search" | "find" => Ok(Self::Search {
                query: Self::require_text(rest, "search <text>")?,
            }),
            "featured" | "feat" => Ok(Self::Featured {
                query: rest.trim_end_matches(['\r', '\n']).to_string(),
            }),
            "distance" | "dist" => Self::parse_distance(&parts[1..], rest),
            "load" => Self::parse_load(&parts[1..]),
            "catalog" | "catalogue" => Self::parse_catalog(&parts[1..]),
            "limit" => Self::parse_limit(&parts[1..]),
            "show-distances" | "show-dist" => Self::parse_show_distances(&parts[1..]),
            "stats" | "info" => Ok(Self::Stats),
            "settings" | "set" | "config" => Ok(Self::Settings),
            "save" => Ok(Self::Save),
            "help" | "?" => Ok(Self::Help {
                topic: parts.get(1).map(|s| s.to_string()),
            }),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(anyhow::anyhow!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                cmd
            )),
        }
    }

    fn require_text(rest: &str, usage: &str) -> Result<String> {
        let text = rest.trim();
        if text.is_empty() {
            return Err(anyhow::anyhow!("Usage: {}", usage));
        }
        Ok(text.to_string())
    }

    fn parse_match(args: &[&str], rest: &str) -> Result<Self> {
        let mut pass = Some(Pass::Primary);
        let mut text = rest.trim_start();

        for arg in args {
            match *arg {
                "--fallback" | "-f" => pass = Some(Pass::Fallback),
                "--raw" | "-r" => pass = None,
                _ => break,
            }
            text = text[arg.len()..].trim_start();
        }

        Ok(Self::Match {
            query: Self::require_text(text, "match [--fallback|--raw] <text>")?,
            pass,
        })
    }

    fn parse_distance(args: &[&str], rest: &str) -> Result<Self> {
        let usage = "Usage: distance <name>, <name>";
        let (source, target) = match rest.split_once(',') {
            Some((a, b)) => (a.trim(), b.trim()),
            None if args.len() == 2 => (args[0], args[1]),
            None => return Err(anyhow::anyhow!(usage)),
        };
        if source.is_empty() || target.is_empty() {
            return Err(anyhow::anyhow!(usage));
        }
        Ok(Self::Distance {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    fn parse_load(args: &[&str]) -> Result<Self> {
        match args.first() {
            None => Err(anyhow::anyhow!("Usage: load <path> | load builtin")),
            Some(arg) if arg.eq_ignore_ascii_case("builtin") => Ok(Self::Load { path: None }),
            Some(arg) => Ok(Self::Load {
                path: Some(PathBuf::from(arg)),
            }),
        }
    }

    fn parse_catalog(args: &[&str]) -> Result<Self> {
        match args.first() {
            None => Err(anyhow::anyhow!("Usage: catalog <path>")),
            Some(arg) => Ok(Self::Catalog {
                path: PathBuf::from(arg),
            }),
        }
    }

    fn parse_limit(args: &[&str]) -> Result<Self> {
        let Some(arg) = args.first() else {
            return Err(anyhow::anyhow!("Usage: limit <n>"));
        };
        Ok(Self::Limit {
            limit: arg.parse().context("Invalid limit value")?,
        })
    }

    fn parse_show_distances(args: &[&str]) -> Result<Self> {
        let enable = if args.is_empty() {
            None
        } else {
            Some(match args[0].to_lowercase().as_str() {
                "on" | "true" | "yes" | "1" => true,
                "off" | "false" | "no" | "0" => false,
                _ => return Err(anyhow::anyhow!("Usage: show-distances [on|off]")),
            })
        };
        Ok(Self::ShowDistances { enable })
    }

    /// Execute command
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult> {
        match self {
            Self::Suggest { query } => {
                let params = SuggestParams {
                    query: query.clone(),
                    limit: state.session.config().suggestion_limit,
                };
                let results = suggest::execute_suggest(&state.session, &params);
                Ok(CommandResult::Continue(Self::format_suggestions(&results)))
            }

            Self::Match { query, pass } => {
                let params = MatchParams {
                    query: query.clone(),
                    pass: *pass,
                };
                let found = correct::execute_match(&state.session, &params);
                let output = match found {
                    Some(_) => correct::format_match(found.as_ref(), state.show_distances)
                        .green()
                        .to_string(),
                    None => "No suggestion".yellow().to_string(),
                };
                Ok(CommandResult::Continue(output))
            }

            Self::Search { query } => {
                let result = search::search_and_format(&state.session, &state.catalog, query);
                if result.output.is_empty() {
                    Ok(CommandResult::Silent)
                } else {
                    Ok(CommandResult::Continue(result.output))
                }
            }

            Self::Featured { query } => {
                let featured = state.session.featured(query);
                if featured.is_empty() {
                    return Ok(CommandResult::Continue(NO_FEATURED_MESSAGE.yellow().to_string()));
                }
                Ok(CommandResult::Continue(Self::format_suggestions(&featured)))
            }

            Self::Distance { source, target } => {
                let distance = folded_distance(source, target);
                Ok(CommandResult::Continue(format!(
                    "{} ↔ {}: {}",
                    source.cyan(),
                    target.cyan(),
                    distance.to_string().green().bold()
                )))
            }

            Self::Load { path } => {
                let (count, source) = match path {
                    Some(path) => (state.load_corpus(path)?, path.display().to_string()),
                    None => (state.reset_corpus(), "built-in catalogue".to_string()),
                };
                Ok(CommandResult::Continue(format!(
                    "Loaded {} name(s) from {}",
                    count.to_string().green().bold(),
                    source.cyan()
                )))
            }

            Self::Catalog { path } => {
                let count = state.load_catalog(path)?;
                Ok(CommandResult::Continue(format!(
                    "Loaded {} catalogue entr(ies) from {}",
                    count.to_string().green().bold(),
                    path.display().to_string().cyan()
                )))
            }

            Self::Limit { limit } => {
                state.set_limit(*limit);
                Ok(CommandResult::Continue(format!(
                    "Suggestion limit set to {}",
                    limit.to_string().green()
                )))
            }

            Self::ShowDistances { enable } => {
                state.show_distances = enable.unwrap_or(!state.show_distances);
                let status = if state.show_distances {
                    "enabled".green()
                } else {
                    "disabled".red()
                };
                Ok(CommandResult::Continue(format!("Show distances {}", status)))
            }

            Self::Stats => Ok(CommandResult::Continue(state.stats().to_string())),

            Self::Settings => Ok(CommandResult::Continue(Self::format_settings(state))),

            Self::Save => {
                state.save_config()?;
                Ok(CommandResult::Continue("Settings saved".green().to_string()))
            }

            Self::Help { topic } => match topic {
                Some(topic) => Ok(CommandResult::Continue(Self::command_help(topic))),
                None => Ok(CommandResult::Continue(Self::general_help())),
            },

            Self::Exit => Ok(CommandResult::Exit),
        }
    }

    fn format_suggestions(results: &[&str]) -> String {
        if results.is_empty() {
            return "No suggestions".yellow().to_string();
        }

        let mut output = String::new();
        for (i, name) in results.iter().enumerate() {
            output.push_str(&format!("{:4}. {}\n", i + 1, name.cyan()));
        }
        output
    }

    fn format_settings(state: &ReplState) -> String {
        let config = state.session.config();
        let corpus = state
            .corpus_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string());
        let catalog = state
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());

        format!(
            "{}\n  Corpus:            {}\n  Catalogue:         {}\n  Suggestion limit:  {}\n  Min query length:  {}\n  Primary distance:  {}\n  Fallback distance: {}\n  Show distances:    {}\n",
            "Settings".bold().underline(),
            corpus.cyan(),
            catalog.cyan(),
            config.suggestion_limit.to_string().yellow(),
            config.min_query_len.to_string().yellow(),
            config.primary.to_string().yellow(),
            config.fallback.to_string().yellow(),
            if state.show_distances {
                "enabled".green()
            } else {
                "disabled".red()
            }
        )
    }

    fn general_help() -> String {
        format!(
            r#"{}

{}
  suggest, s <text>         Autocomplete suggestions for a partial name
  match, m [--fallback|--raw] <text>
                            "Did you mean?" correction for a name
  search, find <text>       Submit a name: correction, lookup, fallback
  featured, feat [text]     Featured exercises containing the text
  distance, dist <a>, <b>   Case-insensitive edit distance

{}
  load <path> | builtin     Load a corpus (text or JSON)
  catalog <path>            Load an exercise detail catalogue (JSON)
  limit <n>                 Set suggestion limit
  show-distances [on|off]   Toggle distance display in matches
  settings, set             Show current settings
  save                      Persist current settings
  stats, info               Show corpus statistics

{}
  help, ? [command]         Show this help or help for specific command
  exit, quit                Exit REPL

{}
  fitlex> suggest bench
  fitlex> match Bencch Pres
  fitlex> match --fallback dedlfit
  fitlex> distance squat, sqaut

For detailed help on a command, type: help <command>
"#,
            "fitlex REPL - Exercise Name Explorer".bold().underline(),
            "Matching:".bold(),
            "Configuration:".bold(),
            "Utility:".bold(),
            "Examples:".bold(),
        )
    }

    fn command_help(topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "suggest" | "s" => format!(
                "{}\n\n  Names containing <text>, ignoring case. Names starting with the\n  text come first, then shorter names. Exact matches are left out.\n",
                "suggest <text>".bold()
            ),
            "match" | "m" => format!(
                "{}\n\n  Closest name by edit distance. Queries of three characters or\n  fewer and exact matches get no correction.\n\n  --fallback, -f   Looser threshold used after a failed lookup\n  --raw, -r        Closest name with no rules applied\n",
                "match [--fallback|--raw] <text>".bold()
            ),
            "search" | "find" => format!(
                "{}\n\n  Runs the primary correction, looks the name up in the loaded\n  catalogue, and runs the fallback correction if the lookup fails.\n",
                "search <text>".bold()
            ),
            "featured" | "feat" => format!(
                "{}\n\n  Featured exercises containing the text as typed, ignoring case.\n",
                "featured [text]".bold()
            ),
            "distance" | "dist" => format!(
                "{}\n\n  Separate multi-word names with a comma.\n",
                "distance <a>, <b>".bold()
            ),
            "load" => format!(
                "{}\n\n  One name per line, or a JSON array of names (.json).\n",
                "load <path> | load builtin".bold()
            ),
            other => format!("No help available for '{}'", other).yellow().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_query_text() {
        assert_eq!(
            Command::parse("search  Bench  Press ").unwrap(),
            Command::Search {
                query: "Bench  Press".to_string()
            }
        );
    }

    #[test]
    fn test_parse_match_flags() {
        assert_eq!(
            Command::parse("m -f dedlfit").unwrap(),
            Command::Match {
                query: "dedlfit".to_string(),
                pass: Some(Pass::Fallback),
            }
        );
        assert_eq!(
            Command::parse("match --raw xyz").unwrap(),
            Command::Match {
                query: "xyz".to_string(),
                pass: None,
            }
        );
        assert!(Command::parse("match --fallback").is_err());
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(
            Command::parse("dist bench press, bench pres").unwrap(),
            Command::Distance {
                source: "bench press".to_string(),
                target: "bench pres".to_string(),
            }
        );
        assert!(Command::parse("dist squat").is_err());
    }

    #[test]
    fn test_featured_keeps_raw_text() {
        assert_eq!(
            Command::parse("featured  press").unwrap(),
            Command::Featured {
                query: " press".to_string()
            }
        );
    }

    #[test]
    fn test_execute_suggest_and_exit() {
        let mut state = ReplState::new();
        let result = Command::parse("suggest nordic").unwrap().execute(&mut state).unwrap();
        assert!(matches!(result, CommandResult::Continue(ref s) if s.contains("Nordic")));
        assert_eq!(
            Command::Exit.execute(&mut state).unwrap(),
            CommandResult::Exit
        );
    }
}
