//! REPL command implementation

use super::format_diagnostic;
use anyhow::Result;
use lox_runtime::{ReplCore, Value, EXIT_OK};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// If `no_history` is true, history is neither loaded nor saved.
pub fn run(no_history: bool, config: &crate::config::Config) -> Result<i32> {
    let mut rl = DefaultEditor::new()?;
    let mut repl = ReplCore::with_output(Box::new(std::io::stdout()));

    let history_path = if no_history {
        None
    } else {
        config.get_history_path()
    };
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path); // missing file on first run
    }

    println!("Lox v{} REPL", lox_runtime::VERSION);
    println!("Type statements to evaluate them, :help for commands");
    println!();

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match trimmed {
                    ":quit" | ":q" => break,
                    ":reset" => {
                        repl.reset();
                        println!("REPL state reset");
                        continue;
                    }
                    ":help" | ":h" => {
                        print_help();
                        continue;
                    }
                    ":vars" => {
                        print!("{}", format_vars(&repl.variables()));
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(&line);

                let result = repl.eval_line(&line);
                tracing::debug!(ok = result.is_ok(), "evaluated repl line");

                for diagnostic in &result.diagnostics {
                    eprintln!("{}", format_diagnostic(diagnostic, config.default_json));
                }
                if let Some(value) = result.value {
                    println!("{}", value);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                println!("Use :quit or :q to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(EXIT_OK)
}

fn print_help() {
    println!("Lox REPL Commands:");
    println!("  :quit, :q         Exit the REPL");
    println!("  :reset            Clear all variables and functions");
    println!("  :help, :h         Show this help message");
    println!("  :vars             List global variables");
    println!();
    println!("A line ending in an expression statement echoes its value:");
    println!("  > var x = 40;");
    println!("  > x + 2;");
    println!("  42");
}

/// One `name = value` line per binding
fn format_vars(vars: &[(String, Option<Value>)]) -> String {
    if vars.is_empty() {
        return "No variables defined\n".to_string();
    }

    vars.iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{} = {}\n", name, value),
            None => format!("{} = <uninitialized>\n", name),
        })
        .collect()
}
