//! REPL command handlers.
//!
//! Each command is implemented as a separate function for maintainability.
//! Handlers write to the supplied sink so batch mode and tests can capture
//! output; failures are returned, never printed here.

use std::io::{self, Write};

use colored::Colorize;
use graphwalk_core::{OutputFormat, VertexId};

use crate::dataset;
use crate::render::{self, Traversal};
use crate::repl::Session;

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    /// The command needs a yes/no answer before it runs.
    Confirm(PendingAction),
    Error(String),
}

/// Destructive actions that are confirmed before being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    LoadDefault,
}

impl PendingAction {
    /// Question shown to the operator.
    pub fn question(self) -> &'static str {
        match self {
            Self::LoadDefault => {
                "Loading the default graph deletes every vertex and edge of the current one. Continue?"
            }
        }
    }
}

/// Why a command failed; rendered as the message of `CommandResult::Error`.
#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Graph(#[from] graphwalk_core::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

type Outcome = Result<CommandResult, Failure>;

fn settle(outcome: Outcome) -> CommandResult {
    outcome.unwrap_or_else(|failure| CommandResult::Error(failure.to_string()))
}

/// Handle a REPL command (`.add A`, `add A` and `\add A` are equivalent).
pub fn handle_command(session: &mut Session, line: &str, out: &mut dyn Write) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts
        .first()
        .map(|s| s.trim_start_matches(['.', '\\']).to_lowercase())
        .unwrap_or_default();

    let outcome = match cmd.as_str() {
        "quit" | "exit" | "q" => Ok(CommandResult::Quit),
        "help" | "h" => print_help(out).map(|()| CommandResult::Continue).map_err(Failure::from),
        "add" => cmd_add(session, &parts, out),
        "list" | "ls" => cmd_list(session, out),
        "show" => cmd_show(session, &parts, out),
        "remove" | "rm" => cmd_remove(session, &parts, out),
        "link" => cmd_link(session, &parts, out),
        "unlink" => cmd_unlink(session, &parts, out),
        "dfs" => cmd_traverse(session, &parts, Traversal::Depth, out),
        "bfs" => cmd_traverse(session, &parts, Traversal::Breadth, out),
        "default" => cmd_default(session, &parts, out),
        "format" => cmd_format(session, &parts, out),
        "config" => cmd_config(session, out),
        "clear" => cmd_clear(out),
        _ => Ok(CommandResult::Error(format!(
            "Unknown command: {}. Type .help for the list.",
            parts.first().copied().unwrap_or_default()
        ))),
    };
    settle(outcome)
}

/// Runs a previously confirmed action.
pub fn apply_pending(
    session: &mut Session,
    action: PendingAction,
    out: &mut dyn Write,
) -> CommandResult {
    settle(match action {
        PendingAction::LoadDefault => load_default(session, out),
    })
}

fn usage(text: &str) -> Failure {
    Failure::Message(format!("Usage: {text}"))
}

/// Vertex keys are single characters.
fn parse_key(token: &str) -> Result<char, Failure> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Ok(key),
        _ => Err(Failure::Message(format!(
            "Vertex keys are single characters, got '{token}'"
        ))),
    }
}

fn resolve(session: &Session, token: &str) -> Result<(char, VertexId), Failure> {
    let key = parse_key(token)?;
    session
        .graph
        .find_vertex(&key)
        .map(|id| (key, id))
        .ok_or_else(|| Failure::Message(format!("Vertex '{key}' not found")))
}

fn print_json(out: &mut dyn Write, value: &serde_json::Value) -> Result<(), Failure> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn cmd_add(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let [_, token] = parts else {
        return Err(usage(".add <key>"));
    };
    let key = parse_key(token)?;
    session
        .graph
        .create_vertex(key)
        .map_err(|e| Failure::Message(format!("{e}. Choose another key.")))?;
    writeln!(out, "{} Vertex '{}' created.", "✓".green(), key)?;
    Ok(CommandResult::Continue)
}

fn cmd_list(session: &Session, out: &mut dyn Write) -> Outcome {
    let graph = &session.graph;
    match session.config.format {
        OutputFormat::Json => print_json(out, &render::vertices_json(graph))?,
        OutputFormat::Text if graph.is_empty() => writeln!(out, "No vertices.")?,
        OutputFormat::Text => {
            writeln!(out, "{}", render::vertex_table(graph))?;
            writeln!(out, "{} vertices, {} edges", graph.len(), graph.edge_count())?;
        }
    }
    Ok(CommandResult::Continue)
}

fn cmd_show(session: &Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let [_, token] = parts else {
        return Err(usage(".show <key>"));
    };
    let (key, id) = resolve(session, token)?;
    let neighbors = session.graph.neighbor_keys(id).unwrap_or_default();

    match session.config.format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({ "vertex": key, "neighbors": neighbors }),
        )?,
        OutputFormat::Text if neighbors.is_empty() => {
            writeln!(out, "Vertex '{key}' has no edges.")?;
        }
        OutputFormat::Text => {
            writeln!(out, "Vertices linked to '{}':", key.to_string().cyan())?;
            for neighbor in neighbors {
                writeln!(out, " - {neighbor}")?;
            }
        }
    }
    Ok(CommandResult::Continue)
}

fn cmd_remove(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let [_, token] = parts else {
        return Err(usage(".remove <key>"));
    };
    let (_, id) = resolve(session, token)?;
    let key = session.graph.delete_vertex(id)?;
    writeln!(out, "{} Vertex '{}' deleted.", "✓".green(), key)?;
    Ok(CommandResult::Continue)
}

fn cmd_link(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let [_, first, second] = parts else {
        return Err(usage(".link <key> <key>"));
    };
    let (a, from) = resolve(session, first)?;
    let (b, to) = resolve(session, second)?;

    if session.graph.edge_exists(from, to) {
        return Err(Failure::Message(format!(
            "An edge already links '{a}' and '{b}'"
        )));
    }
    session.graph.create_edge(from, to)?;
    writeln!(out, "{} Edge {}-{} created.", "✓".green(), a, b)?;
    Ok(CommandResult::Continue)
}

fn cmd_unlink(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let [_, first, second] = parts else {
        return Err(usage(".unlink <key> <key>"));
    };
    let (a, from) = resolve(session, first)?;
    let (b, to) = resolve(session, second)?;

    session.graph.delete_edge(from, to)?;
    writeln!(out, "{} Edge {}-{} deleted.", "✓".green(), a, b)?;
    Ok(CommandResult::Continue)
}

fn cmd_traverse(
    session: &mut Session,
    parts: &[&str],
    traversal: Traversal,
    out: &mut dyn Write,
) -> Outcome {
    let [_, token] = parts else {
        return Err(usage(&format!(".{} <key>", traversal.name())));
    };
    let (start, id) = resolve(session, token)?;
    let steps: Vec<_> = match traversal {
        Traversal::Breadth => session.graph.breadth_first(id).collect(),
        Traversal::Depth => session.graph.depth_first(id).collect(),
    };

    match session.config.format {
        OutputFormat::Json => print_json(out, &render::trace_json(traversal, start, &steps))?,
        OutputFormat::Text => {
            let title = match traversal {
                Traversal::Breadth => "Breadth-first search",
                Traversal::Depth => "Depth-first search",
            };
            writeln!(out, "{} from '{}':", title.bold(), start)?;
            for step in &steps {
                writeln!(out, "{}", render::paint_step(traversal, step))?;
            }
            writeln!(out)?;
        }
    }
    Ok(CommandResult::Continue)
}

fn cmd_default(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    let forced = parts.get(1).is_some_and(|flag| matches!(*flag, "--yes" | "-y"));
    if forced || session.graph.is_empty() {
        load_default(session, out)
    } else {
        Ok(CommandResult::Confirm(PendingAction::LoadDefault))
    }
}

fn load_default(session: &mut Session, out: &mut dyn Write) -> Outcome {
    dataset::load_default(&mut session.graph)?;
    writeln!(
        out,
        "{} Default graph loaded ({} vertices, {} edges).",
        "✓".green(),
        session.graph.len(),
        session.graph.edge_count()
    )?;
    Ok(CommandResult::Continue)
}

fn cmd_format(session: &mut Session, parts: &[&str], out: &mut dyn Write) -> Outcome {
    match parts.get(1) {
        None => writeln!(out, "Format is {:?}", session.config.format)?,
        Some(value) => {
            let format: OutputFormat = value.parse().map_err(|_| usage(".format text|json"))?;
            session.config.format = format;
            writeln!(out, "Format: {value}")?;
        }
    }
    Ok(CommandResult::Continue)
}

fn cmd_config(session: &Session, out: &mut dyn Write) -> Outcome {
    let mut effective = session.config.settings.clone();
    effective.shell.format = session.config.format;
    writeln!(out, "{}", effective.to_toml()?)?;
    Ok(CommandResult::Continue)
}

fn cmd_clear(out: &mut dyn Write) -> Outcome {
    write!(out, "\x1B[2J\x1B[1;1H")?;
    out.flush()?;
    Ok(CommandResult::Continue)
}

/// Print help text for REPL commands
pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{}", "graphwalk Commands".bold().underline())?;
    writeln!(out)?;
    let rows = [
        (".add <k>", "Create a vertex"),
        (".list", "List vertices and their neighbours"),
        (".show <k>", "Show the neighbours of a vertex"),
        (".remove <k>", "Delete a vertex and its edges"),
        (".link <a> <b>", "Create an edge"),
        (".unlink <a> <b>", "Delete an edge"),
        (".dfs <k>", "Depth-first search from a vertex"),
        (".bfs <k>", "Breadth-first search from a vertex"),
        (".default [--yes]", "Replace the graph with the default dataset"),
        (".format text|json", "Set output format"),
        (".config", "Show effective configuration"),
        (".clear", "Clear screen"),
        (".help", "Show this help"),
        (".quit", "Exit"),
    ];
    for (command, description) in rows {
        writeln!(out, "  {:<20} {}", command.yellow(), description)?;
    }
    writeln!(out)?;
    writeln!(out, "Vertex keys are single characters, e.g. {}", ".link A B".italic())?;
    writeln!(out)
}
