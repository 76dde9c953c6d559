//! fitlex - Exercise name autocomplete and "did you mean?" suggestions
//!
//! Provides CLI utilities and an interactive REPL over the exercise catalogue.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use fitlex::cli::commands;
use fitlex::cli::paths::PersistentConfig;
use fitlex::cli::{Cli, Commands};
use fitlex::repl::{Command, CommandResult, FitlexHelper, ReplConfig, ReplState};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Repl { corpus, catalog } => run_repl(corpus, catalog, cli.config),
        command => commands::execute(command, cli.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run_repl(
    corpus: Option<PathBuf>,
    catalog: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // CLI paths win over the persisted ones; nothing is saved until `save`
    let config = PersistentConfig::load_from(config_path.as_deref())
        .unwrap_or_else(|err| {
            log::warn!("Ignoring configuration, using defaults: {:#}", err);
            PersistentConfig::default()
        })
        .merge_with_cli(corpus, catalog, None);

    print_banner();

    let mut state = match ReplState::from_config(&config, config_path.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("  {}: {:#}", "Warning".yellow(), e);
            eprintln!("  Falling back to the built-in catalogue");
            println!();
            ReplState {
                config_file_path: config_path,
                ..ReplState::new()
            }
        }
    };
    println!(
        "  Loaded {} exercise name(s)",
        state.session.corpus().len().to_string().green().bold()
    );
    println!();

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .max_history_size(repl_config.max_history)?
        .build();

    let helper = FitlexHelper::new(
        state.session.corpus().clone(),
        state.session.config().suggestion_limit,
    );
    let mut editor: Editor<FitlexHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(helper));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        let prompt = format!("{}", repl_config.prompt.bright_cyan().bold());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Use 'exit' or Ctrl+D to quit".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                continue;
            }
        };

        match command.execute(&mut state) {
            Ok(CommandResult::Continue(output)) => println!("{}", output.trim_end()),
            Ok(CommandResult::Silent) => {}
            Ok(CommandResult::Exit) => break,
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                continue;
            }
        }

        // Keep completion in step with the session
        if matches!(command, Command::Load { .. } | Command::Limit { .. }) {
            if let Some(helper) = editor.helper_mut() {
                helper.set_corpus(state.session.corpus().clone());
                helper.set_limit(state.session.config().suggestion_limit);
            }
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!(
        "{}",
        "   fitlex - Exercise Name Search".bright_cyan().bold()
    );
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
    println!("{}", "  Quick Start:".bold());
    println!("    • Autocomplete:   {}", "suggest bench".cyan());
    println!("    • Correct a typo: {}", "match Bencch Pres".cyan());
    println!("    • Search:         {}", "search dedlfit".cyan());
    println!("    • Show settings:  {}", "settings".cyan());
    println!();
}
