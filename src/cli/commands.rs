//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::commands::handlers::{correct, suggest};
use crate::commands::{MatchParams, SuggestParams};
use crate::corpus::FEATURED_EXERCISES;
use crate::distance::{folded_distance, standard_distance};
use crate::matcher::Pass;
use crate::search::NO_FEATURED_MESSAGE;
use crate::suggest::filter_featured;

use super::args::Commands;
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Repl { .. } => {
            // Handled in main.rs
            bail!("REPL command should be handled in main");
        }
        Commands::Suggest {
            query,
            corpus,
            limit,
        } => cmd_suggest(&query, corpus, limit, config_path),
        Commands::Match {
            query,
            corpus,
            fallback,
            raw,
            show_distances,
        } => {
            let pass = match (raw, fallback) {
                (true, _) => None,
                (false, true) => Some(Pass::Fallback),
                (false, false) => Some(Pass::Primary),
            };
            cmd_match(&query, corpus, pass, show_distances, config_path)
        }
        Commands::Search {
            query,
            corpus,
            catalog,
            json,
        } => cmd_search(&query, corpus, catalog, json, config_path),
        Commands::Featured { query } => cmd_featured(query.as_deref().unwrap_or("")),
        Commands::Distance {
            source,
            target,
            case_sensitive,
        } => cmd_distance(&source, &target, case_sensitive),
        Commands::Info { corpus } => cmd_info(corpus, config_path),
        Commands::Settings {
            set_corpus,
            set_catalog,
            set_limit,
            set_max_distance,
            set_fallback_distance,
            set_show_distances,
            reset,
        } => cmd_settings(
            SettingsUpdate {
                corpus: set_corpus,
                catalog: set_catalog,
                limit: set_limit,
                max_distance: set_max_distance,
                fallback_distance: set_fallback_distance,
                show_distances: set_show_distances,
            },
            reset,
            config_path,
        ),
    }
}

/// Suggest command
fn cmd_suggest(
    query: &str,
    corpus: Option<PathBuf>,
    limit: Option<usize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(corpus, None, None);
    let session = config.session()?;

    let params = SuggestParams {
        query: query.to_string(),
        limit: limit.unwrap_or(session.config().suggestion_limit),
    };
    let results = suggest::execute_suggest(&session, &params);

    if results.is_empty() {
        println!("{}", "No suggestions".yellow());
    } else {
        for name in results {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Match command
fn cmd_match(
    query: &str,
    corpus: Option<PathBuf>,
    pass: Option<Pass>,
    show_distances: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?;
    let show_distances = show_distances || config.show_distances.unwrap_or(false);
    let config = config.merge_with_cli(corpus, None, Some(show_distances));
    let session = config.session()?;

    let params = MatchParams {
        query: query.to_string(),
        pass,
    };

    match correct::execute_match(&session, &params) {
        Some(found) if show_distances => {
            println!("{} ({})", found.term.green(), found.distance.to_string().yellow())
        }
        Some(found) => println!("{}", found.term.green()),
        None => println!("{}", "No suggestion".yellow()),
    }

    Ok(())
}

/// Search command
fn cmd_search(
    query: &str,
    corpus: Option<PathBuf>,
    catalog: Option<PathBuf>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(corpus, catalog, None);
    let session = config.session()?;
    let lookup = config.load_catalog()?;

    let Some(outcome) = session.submit(query, &lookup) else {
        bail!("Query is empty");
    };

    if json {
        let body = serde_json::to_string_pretty(&outcome)
            .context("Failed to serialize search outcome")?;
        println!("{}", body);
        return Ok(());
    }

    if let Some(ref suggestion) = outcome.did_you_mean {
        println!("Did you mean? {}", suggestion.term.cyan().bold());
    }
    match (&outcome.detail, outcome.message()) {
        (Some(detail), _) => {
            println!(
                "{} [{} / {}]",
                detail.name.green().bold(),
                detail.kind.yellow(),
                detail.muscle_group.yellow()
            );
            println!("{}", detail.description);
        }
        (None, Some(message)) => println!("{}", message.red()),
        (None, None) => {}
    }

    Ok(())
}

/// Featured command
fn cmd_featured(query: &str) -> Result<()> {
    let featured = filter_featured(query, FEATURED_EXERCISES);
    if featured.is_empty() {
        println!("{}", NO_FEATURED_MESSAGE.yellow());
        return Ok(());
    }

    println!("{}", "Featured Exercises".bold().underline());
    println!();
    print!("{}", suggest::format_suggestions(&featured));
    println!();

    Ok(())
}

/// Distance command
fn cmd_distance(source: &str, target: &str, case_sensitive: bool) -> Result<()> {
    let distance = if case_sensitive {
        standard_distance(source, target)
    } else {
        folded_distance(source, target)
    };
    println!("{}", distance);
    Ok(())
}

/// Info command
fn cmd_info(corpus: Option<PathBuf>, config_path: Option<&Path>) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(corpus, None, None);
    let session = config.session()?;
    let corpus = session.corpus();

    println!("{}", "Corpus Information".bold().underline());
    println!();
    let source = config
        .corpus_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());
    println!("  Source:   {}", source.cyan());
    println!("  Entries:  {}", corpus.len().to_string().green());
    println!("  Unique:   {}", corpus.unique_len().to_string().green());
    println!(
        "  Featured: {}",
        FEATURED_EXERCISES.len().to_string().green()
    );
    println!();

    Ok(())
}

/// Settings requested on the command line
struct SettingsUpdate {
    corpus: Option<PathBuf>,
    catalog: Option<PathBuf>,
    limit: Option<usize>,
    max_distance: Option<usize>,
    fallback_distance: Option<usize>,
    show_distances: Option<bool>,
}

/// Settings command
fn cmd_settings(update: SettingsUpdate, reset: bool, config_path: Option<&Path>) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, config_path);
        return Ok(());
    }

    // A broken config file is reported, never overwritten with defaults
    let mut config = PersistentConfig::load_from(config_path)?;
    let mut matching = config.match_config();
    let mut changed = false;

    if let Some(corpus) = update.corpus {
        println!(
            "  Set default corpus path: {}",
            corpus.display().to_string().cyan()
        );
        config.corpus_path = Some(corpus);
        changed = true;
    }

    if let Some(catalog) = update.catalog {
        println!(
            "  Set default catalogue path: {}",
            catalog.display().to_string().cyan()
        );
        config.catalog_path = Some(catalog);
        changed = true;
    }

    if let Some(limit) = update.limit {
        matching.suggestion_limit = limit;
        println!("  Set suggestion limit: {}", limit.to_string().green());
        changed = true;
    }

    if let Some(distance) = update.max_distance {
        if distance < matching.primary.min_distance {
            bail!(
                "Primary max distance must be at least {}",
                matching.primary.min_distance
            );
        }
        matching.primary.max_distance = distance;
        println!("  Set primary max distance: {}", distance.to_string().green());
        changed = true;
    }

    if let Some(distance) = update.fallback_distance {
        matching.fallback.max_distance = distance;
        println!(
            "  Set fallback max distance: {}",
            distance.to_string().green()
        );
        changed = true;
    }

    if let Some(show) = update.show_distances {
        config.show_distances = Some(show);
        println!("  Set show distances: {}", show.to_string().green());
        changed = true;
    }

    if changed {
        config.matching = Some(matching);
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    }

    println!();
    print_config(&config, config_path);

    Ok(())
}

fn print_config(config: &PersistentConfig, config_path: Option<&Path>) {
    println!("{}", "Current Configuration:".bold().underline());
    println!();

    if let Ok(path) = config_file_path_with_override(config_path) {
        println!("  Config File:        {}", path.display().to_string().cyan());
    }

    let display_path = |path: &Option<PathBuf>, fallback: &str| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| fallback.to_string())
    };
    println!(
        "  Corpus Path:        {}",
        display_path(&config.corpus_path, "(built-in)").cyan()
    );
    println!(
        "  Catalogue Path:     {}",
        display_path(&config.catalog_path, "(none)").cyan()
    );

    let matching = config.match_config();
    println!(
        "  Suggestion Limit:   {}",
        matching.suggestion_limit.to_string().yellow()
    );
    println!(
        "  Min Query Length:   {}",
        matching.min_query_len.to_string().yellow()
    );
    println!(
        "  Primary Distance:   {}",
        matching.primary.to_string().yellow()
    );
    println!(
        "  Fallback Distance:  {}",
        matching.fallback.to_string().yellow()
    );
    println!(
        "  Show Distances:     {}",
        if config.show_distances.unwrap_or(false) {
            "enabled".green()
        } else {
            "disabled".red()
        }
    );
    println!();
}
