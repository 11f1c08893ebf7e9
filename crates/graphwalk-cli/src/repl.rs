//! Interactive loop and batch runner.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use graphwalk_core::{GraphStore, GraphwalkConfig, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::repl_commands::{apply_pending, handle_command, CommandResult};

/// Session settings, seeded from the `[shell]` configuration section.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub format: OutputFormat,
    pub history_file: Option<PathBuf>,
    /// Configuration the session started from, shown by `.config`.
    pub settings: GraphwalkConfig,
}

impl ReplConfig {
    pub fn from_config(settings: &GraphwalkConfig) -> Self {
        Self {
            prompt: settings.shell.prompt.clone(),
            format: settings.shell.format,
            history_file: settings.shell.history_file.clone(),
            settings: settings.clone(),
        }
    }
}

/// The graph being edited plus session settings.
///
/// Owned by `main` and passed explicitly to every command.
#[derive(Debug)]
pub struct Session {
    pub graph: GraphStore<char>,
    pub config: ReplConfig,
}

impl Session {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            graph: GraphStore::new(),
            config,
        }
    }
}

/// Asks a yes/no question until a valid answer is typed.
///
/// End of input or Ctrl-C count as "no".
fn confirm(rl: &mut DefaultEditor, question: &str) -> rustyline::Result<bool> {
    println!("{question}");
    loop {
        match rl.readline("(y/n): ") {
            Ok(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(false),
            Err(e) => return Err(e),
        }
    }
}

fn report_error(msg: &str) {
    eprintln!("{} {}\n", "Error:".red().bold(), msg);
}

/// Runs the interactive read-eval-print loop until `.quit` or end of input.
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &session.config.history_file {
        if rl.load_history(path).is_err() {
            tracing::debug!(path = %path.display(), "no previous history");
        }
    }

    println!(
        "{} v{}. Type {} for commands.\n",
        "graphwalk".bold(),
        env!("CARGO_PKG_VERSION"),
        ".help".yellow()
    );

    let stdout = io::stdout();
    loop {
        let line = match rl.readline(&session.config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line)?;

        let result = handle_command(session, line, &mut stdout.lock());
        match result {
            CommandResult::Continue => {}
            CommandResult::Quit => break,
            CommandResult::Error(msg) => report_error(&msg),
            CommandResult::Confirm(action) => {
                if confirm(&mut rl, action.question())? {
                    if let CommandResult::Error(msg) =
                        apply_pending(session, action, &mut stdout.lock())
                    {
                        report_error(&msg);
                    }
                } else {
                    println!("Operation cancelled.\n");
                }
            }
        }
    }

    if let Some(path) = &session.config.history_file {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    println!("Bye!");
    Ok(())
}

/// Executes commands without prompting and returns how many failed.
///
/// Confirmations are accepted automatically; `.quit` stops early.
pub fn run_batch(session: &mut Session, commands: &[String], out: &mut dyn Write) -> usize {
    let mut failures = 0;
    for line in commands.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        let mut result = handle_command(session, line, out);
        if let CommandResult::Confirm(action) = result {
            tracing::debug!(?action, "auto-confirmed in batch mode");
            result = apply_pending(session, action, out);
        }
        match result {
            CommandResult::Quit => break,
            CommandResult::Error(msg) => {
                failures += 1;
                report_error(&msg);
            }
            CommandResult::Continue | CommandResult::Confirm(_) => {}
        }
    }
    failures
}
