//! The `binexa shell` interactive loop.
//!
//! One line in, one event out. The three fields are printed after every edit
//! so the loop reads like the three synchronized inputs of a form.

use std::io::{BufRead, Write};

use colored::Colorize;

use binexa_sdk::{Base, Binexa, BinexaConfig, EditOutcome, EntryId};

use crate::commands::{rejection_message, warn_on_write_error, write_fields, write_history};

const HELP: &str = "\
commands:
  bin|dec|hex <text>   type <text> into that field (empty text clears it)
  clear                empty all three fields
  save                 save the current conversion
  copy <base>          print one field for copying
  delete <id>          delete a saved conversion
  history              list saved conversions
  clear-history        delete every saved conversion
  help                 show this text
  quit                 leave the shell";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Edit(Base, String),
    Clear,
    Save,
    Copy(Base),
    Delete(EntryId),
    History,
    ClearHistory,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "clear" => ShellCommand::Clear,
        "save" => ShellCommand::Save,
        "history" => ShellCommand::History,
        "clear-history" => ShellCommand::ClearHistory,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "copy" => ShellCommand::Copy(rest.parse().map_err(|e| format!("{e}"))?),
        "delete" => ShellCommand::Delete(rest.parse().map_err(|e| format!("{e}"))?),
        other => match other.parse::<Base>() {
            Ok(base) => ShellCommand::Edit(base, rest.to_string()),
            Err(_) => return Err(format!("unknown command '{word}' (try 'help')")),
        },
    };
    Ok(Some(command))
}

/// Run the loop until `quit` or end of input.
pub(crate) fn run_shell(
    app: &mut Binexa,
    config: &BinexaConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "binexa shell (session {}). Type 'help' for commands.",
        app.session().short_id().cyan()
    )?;

    let mut line = String::new();
    loop {
        write!(out, "{} ", ">".bold())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{} {}", "error:".red().bold(), msg)?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        apply(app, config, command, out)?;
        warn_on_write_error(app, out)?;
    }
    Ok(())
}

fn apply(
    app: &mut Binexa,
    config: &BinexaConfig,
    command: ShellCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::Edit(base, text) => match app.on_edit(base, &text) {
            EditOutcome::Accepted { .. } => write_fields(out, &app.view())?,
            EditOutcome::Rejected(reason) => writeln!(
                out,
                "{} {} (field unchanged)",
                "rejected:".yellow().bold(),
                rejection_message(base, &text, reason)
            )?,
        },
        ShellCommand::Clear => {
            app.on_clear();
            write_fields(out, &app.view())?;
        }
        ShellCommand::Save => match app.on_save() {
            Some(id) => writeln!(out, "{} Saved as {}", "✓".green().bold(), id.to_string().yellow())?,
            None => writeln!(out, "Nothing to save.")?,
        },
        ShellCommand::Copy(base) => match app.on_copy(base) {
            Some(text) => writeln!(out, "{text}")?,
            None => writeln!(out, "The {} field is empty.", base.name())?,
        },
        ShellCommand::Delete(id) => {
            if app.on_delete(id) {
                writeln!(out, "{} Deleted entry {}", "✓".green().bold(), id.to_string().yellow())?;
            } else {
                writeln!(out, "No history entry with id {id}.")?;
            }
        }
        ShellCommand::History => {
            let entries = app.history().entries();
            let shown = &entries[..entries.len().min(config.history_limit)];
            write_history(out, shown, entries.len(), app.export_options())?;
        }
        ShellCommand::ClearHistory => {
            let removed = app.on_clear_history();
            writeln!(out, "{} Removed {} entries", "✓".green().bold(), removed)?;
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}
