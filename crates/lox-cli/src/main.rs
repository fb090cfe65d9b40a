use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// Lox language interpreter.
///
/// Runs Lox programs, starts an interactive REPL, or dumps the token stream
/// and syntax tree of a source file.
///
/// EXAMPLES:
///     lox run main.lox           Run a Lox program
///     lox run main.lox --json    Report errors as JSON
///     lox repl                   Start interactive REPL
///     lox ast main.lox           Print the syntax tree
///     lox tokens main.lox        Print the token stream
///
/// ENVIRONMENT VARIABLES:
///     LOX_DIAGNOSTICS    Set to 'json' for JSON diagnostics by default
///     LOX_HISTORY_FILE   REPL history file (default ~/.lox/history)
///     LOX_NO_HISTORY     Set to disable REPL history
///     LOX_LOG            Tracing filter, e.g. 'lox_runtime=debug'
#[derive(Parser)]
#[command(name = "lox")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Lox source file
    ///
    /// Exits with 65 on syntax errors and 70 on a runtime error.
    ///
    /// EXAMPLES:
    ///     lox run main.lox              Run a program
    ///     lox run main.lox --json       Output diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Lox source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive REPL
    ///
    /// REPL COMMANDS:
    ///     :help, :h      Show help
    ///     :quit, :q      Exit REPL
    ///     :reset         Clear all definitions
    ///     :vars          List defined variables
    Repl {
        /// Disable history persistence (for privacy)
        #[arg(long)]
        no_history: bool,
    },

    /// Print the syntax tree of a source file
    Ast {
        /// Path to the Lox source file
        file: String,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Path to the Lox source file
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    init_tracing(&cli_config);

    let code = match cli.command {
        Some(Commands::Run { file, json }) => {
            // Command-line flag overrides environment variable
            let use_json = json || cli_config.default_json;
            commands::run::run(&file, use_json)?
        }
        Some(Commands::Repl { no_history }) => {
            let disable_history = no_history || cli_config.no_history;
            commands::repl::run(disable_history, &cli_config)?
        }
        Some(Commands::Ast { file }) => commands::ast::run(&file, cli_config.default_json)?,
        Some(Commands::Tokens { file }) => {
            commands::tokens::run(&file, cli_config.default_json)?
        }
        None => commands::repl::run(cli_config.no_history, &cli_config)?,
    };

    if code != lox_runtime::EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}

/// Install a stderr subscriber when a log filter is configured
fn init_tracing(config: &config::Config) {
    let Some(directives) = config.log_filter() else {
        return;
    };

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("warning: ignoring invalid log filter '{}': {}", directives, err);
        EnvFilter::new("warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
