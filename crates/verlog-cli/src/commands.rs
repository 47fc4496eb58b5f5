use colored::Colorize;

use verlog_engine::{Engine, FileOutcome, OutcomeKind, UpdateOutcome};
use verlog_store::CheckpointStore;

use crate::cli::{Cli, Command};

/// How many paths a status category prints before eliding the rest.
const PREVIEW_LIMIT: usize = 3;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = CheckpointStore::new(std::env::current_dir()?);
    let engine = Engine::new(store);
    match cli.command {
        Some(Command::Init) => cmd_init(&engine),
        Some(Command::Status) => cmd_status(&engine),
        Some(Command::Show) => cmd_show(&engine),
        None => cmd_update(&engine),
    }
}

fn cmd_init(engine: &Engine) -> anyhow::Result<()> {
    let report = engine.init()?;
    println!(
        "{} Initialized at {}",
        "✓".green().bold(),
        format!("v{}", report.version).yellow()
    );
    println!("  Tracking {} files", report.tracked.to_string().bold());
    print_caveats(&report.outcomes);
    Ok(())
}

fn cmd_update(engine: &Engine) -> anyhow::Result<()> {
    match engine.update()? {
        UpdateOutcome::NoChanges => println!("{} No changes detected", "✓".green()),
        UpdateOutcome::Checkpointed(report) => {
            println!(
                "{} Version bumped → {}",
                "✓".green().bold(),
                format!("v{}", report.version).yellow().bold()
            );
            println!(
                "  {} new, {} changed, {} deleted",
                report.changes.new_files.len().to_string().green(),
                report.changes.changed.len().to_string().yellow(),
                report.changes.deleted.len().to_string().red()
            );
            println!("  Tracking {} files", report.tracked.to_string().bold());
            print_caveats(&report.outcomes);
        }
    }
    Ok(())
}

fn cmd_status(engine: &Engine) -> anyhow::Result<()> {
    let report = engine.status()?;
    if report.changes.is_empty() {
        println!("{} No changes detected", "✓".green());
    } else {
        print_category("New files".green().bold(), &report.changes.new_files);
        print_category("Changed".yellow().bold(), &report.changes.changed);
        print_category("Deleted".red().bold(), &report.changes.deleted);
    }
    print_caveats(&report.outcomes);
    Ok(())
}

fn cmd_show(engine: &Engine) -> anyhow::Result<()> {
    let report = engine.show()?;
    println!("Current version: {}", format!("v{}", report.version).yellow().bold());
    if report.tracked.is_empty() {
        println!("No files are currently tracked");
    } else {
        println!("Tracked files ({}):", report.tracked.len().to_string().bold());
        for path in &report.tracked {
            println!("  • {path}");
        }
    }
    Ok(())
}

/// Print one classification category: the first few paths, then a count
/// of the rest.
fn print_category(label: colored::ColoredString, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    let preview: Vec<&str> = paths.iter().take(PREVIEW_LIMIT).map(String::as_str).collect();
    println!("{} ({}): {}", label, paths.len(), preview.join(", "));
    if paths.len() > PREVIEW_LIMIT {
        println!("    ... and {} more", paths.len() - PREVIEW_LIMIT);
    }
}

/// Surface degraded and skipped files, so a run never half-succeeds
/// silently.
fn print_caveats(outcomes: &[FileOutcome]) {
    for outcome in outcomes {
        match &outcome.kind {
            OutcomeKind::Ok => {}
            OutcomeKind::Degraded(reason) => {
                println!("  {} {}: {}", "degraded:".yellow(), outcome.path, reason);
            }
            OutcomeKind::Skipped(reason) => {
                println!("  {} {}: {}", "skipped:".red(), outcome.path, reason);
            }
        }
    }
}
