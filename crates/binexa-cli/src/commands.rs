use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use colored::Colorize;
use tracing::debug;

use binexa_export::{csv_file_name, ExportOptions};
use binexa_sdk::{
    Base, Binexa, BinexaConfig, BinexaView, ConversionEntry, EditOutcome, RejectReason,
    StatsReport,
};

use crate::cli::*;
use crate::shell;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = BinexaConfig::discover(cli.data_dir.as_deref()).context("loading config")?;
    debug!(data_dir = %config.data_dir.display(), "resolved config");
    let mut app = Binexa::open_dir(&config)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    execute(&mut app, &config, cli.command, cli.format, &mut input, &mut out)
}

pub(crate) fn execute(
    app: &mut Binexa,
    config: &BinexaConfig,
    command: Command,
    format: OutputFormat,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let result = match command {
        Command::Convert(args) => cmd_convert(app, args, format, out),
        Command::History(args) => {
            let limit = args.limit.unwrap_or(config.history_limit);
            cmd_history(app, limit, format, out)
        }
        Command::Delete(args) => {
            if !app.on_delete(args.id) {
                bail!("no history entry with id {}", args.id);
            }
            match format {
                OutputFormat::Json => write_json(out, &serde_json::json!({ "deleted": args.id }))?,
                OutputFormat::Text => writeln!(
                    out,
                    "{} Deleted entry {}",
                    "✓".green().bold(),
                    args.id.to_string().yellow()
                )?,
            }
            Ok(())
        }
        Command::ClearHistory => {
            let removed = app.on_clear_history();
            match format {
                OutputFormat::Json => write_json(out, &serde_json::json!({ "removed": removed }))?,
                OutputFormat::Text => {
                    writeln!(out, "{} Removed {} entries", "✓".green().bold(), removed)?
                }
            }
            Ok(())
        }
        Command::Export(args) => cmd_export(app, args.output.as_deref(), format, out),
        Command::Stats => cmd_stats(app, format, out),
        Command::Session => {
            match format {
                OutputFormat::Json => {
                    write_json(out, &serde_json::json!({ "session": app.session() }))?
                }
                OutputFormat::Text => writeln!(out, "{}", app.session().as_str().cyan())?,
            }
            Ok(())
        }
        Command::Shell => shell::run_shell(app, config, input, out),
    };
    warn_on_write_error(app, out)?;
    result
}

fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Tell the user when a history write failed. The in-memory state is intact.
pub(crate) fn warn_on_write_error(app: &mut Binexa, out: &mut dyn Write) -> io::Result<()> {
    if let Some(e) = app.take_write_error() {
        writeln!(out, "{} history was not saved: {}", "warning:".yellow().bold(), e)?;
    }
    Ok(())
}

pub(crate) fn rejection_message(base: Base, text: &str, reason: RejectReason) -> String {
    match reason {
        RejectReason::InvalidCharacter => format!("'{}' is not a valid {} number", text, base),
        RejectReason::Overflow => format!("'{}' does not fit in 64 bits", text),
    }
}

fn cmd_convert(
    app: &mut Binexa,
    args: ConvertArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if let EditOutcome::Rejected(reason) = app.on_edit(args.base, &args.value) {
        bail!(rejection_message(args.base, &args.value, reason));
    }
    let saved = if args.save { app.on_save() } else { None };
    let view = app.view();

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "binary": view.binary,
                "decimal": view.decimal,
                "hexadecimal": view.hexadecimal,
                "saved": saved,
            });
            write_json(out, &json)?;
        }
        OutputFormat::Text => {
            write_fields(out, &view)?;
            if let Some(id) = saved {
                writeln!(out, "{} Saved as {}", "✓".green().bold(), id.to_string().yellow())?;
            }
        }
    }
    Ok(())
}

fn cmd_history(
    app: &Binexa,
    limit: usize,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let entries = app.history().entries();
    let shown = &entries[..entries.len().min(limit)];
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(shown)?)?,
        OutputFormat::Text => write_history(out, shown, entries.len(), app.export_options())?,
    }
    Ok(())
}

/// Export to a file, or as raw CSV to `out` when the output is `-`. The raw
/// CSV form ignores `format`.
fn cmd_export(
    app: &mut Binexa,
    output: Option<&Path>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if output == Some(Path::new("-")) {
        app.on_export_csv(&mut *out)?;
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let today = Utc::now()
                .with_timezone(&app.export_options().offset())
                .date_naive();
            csv_file_name(today).into()
        }
    };
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let rows = app.on_export_csv(BufWriter::new(file))?;
    match format {
        OutputFormat::Json => write_json(
            out,
            &serde_json::json!({ "path": path.display().to_string(), "rows": rows }),
        )?,
        OutputFormat::Text => writeln!(
            out,
            "{} Exported {} entries to {}",
            "✓".green().bold(),
            rows,
            path.display().to_string().bold()
        )?,
    }
    Ok(())
}

fn cmd_stats(app: &Binexa, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let Some(report) = app.stats() else {
        writeln!(out, "Analytics are disabled.")?;
        return Ok(());
    };
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => write_stats(out, &report, app.export_options())?,
    }
    Ok(())
}

pub(crate) fn write_fields(out: &mut dyn Write, view: &BinexaView) -> io::Result<()> {
    for base in Base::ALL {
        let text = view.field(base);
        let shown = if text.is_empty() { "-".dimmed() } else { text.bold() };
        writeln!(out, "  {:<12} {}", base.name(), shown)?;
    }
    Ok(())
}

/// Render `timestamp` with the configured pattern, or as RFC 3339 if the
/// pattern is unusable.
fn format_time(options: &ExportOptions, timestamp: DateTime<Utc>) -> String {
    options
        .format_timestamp(timestamp)
        .unwrap_or_else(|_| timestamp.with_timezone(&options.offset()).to_rfc3339())
}

pub(crate) fn write_history(
    out: &mut dyn Write,
    entries: &[ConversionEntry],
    total: usize,
    options: &ExportOptions,
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No saved conversions.")?;
        return Ok(());
    }
    for entry in entries {
        let when = format_time(options, entry.timestamp);
        writeln!(
            out,
            "{}  {}",
            entry.id.to_string().yellow(),
            when.dimmed()
        )?;
        writeln!(
            out,
            "  bin {}  dec {}  hex {}",
            entry.binary, entry.decimal, entry.hexadecimal
        )?;
    }
    if total > entries.len() {
        writeln!(out, "({} of {} shown)", entries.len(), total)?;
    }
    Ok(())
}

fn write_stats(
    out: &mut dyn Write,
    report: &StatsReport,
    options: &ExportOptions,
) -> io::Result<()> {
    writeln!(out, "Sessions:            {}", report.total_sessions.to_string().bold())?;
    writeln!(out, "Events:              {}", report.total_events.to_string().bold())?;
    writeln!(out, "Conversions:         {}", report.total_conversions.to_string().bold())?;
    writeln!(out, "Events per session:  {:.2}", report.average_events_per_session)?;

    if !report.clicks.is_empty() {
        writeln!(out, "\n{}", "Actions".underline())?;
        for (kind, count) in &report.clicks {
            writeln!(out, "  {:<14} {}", kind, count)?;
        }
    }

    writeln!(out, "\n{}", "Conversions by base".underline())?;
    for (base, count) in &report.conversions_by_base {
        writeln!(out, "  {:<14} {}", base.name(), count)?;
    }

    if !report.events_by_hour.is_empty() {
        writeln!(out, "\n{}", "Events by hour".underline())?;
        for bucket in &report.events_by_hour {
            writeln!(out, "  {:02}:00          {}", bucket.hour, bucket.count)?;
        }
    }

    if !report.session_details.is_empty() {
        writeln!(out, "\n{}", "Sessions".underline())?;
        for session in &report.session_details {
            writeln!(
                out,
                "  {}  first {}  last {}",
                session.session_id.short_id().cyan(),
                format_time(options, session.first_visit),
                format_time(options, session.last_visit)
            )?;
        }
        if report.total_sessions > report.session_details.len() {
            writeln!(
                out,
                "  ({} of {} shown)",
                report.session_details.len(),
                report.total_sessions
            )?;
        }
    }
    Ok(())
}
