use super::load_config;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Cell, Color, Table};
use plexarr_clients::Services;
use plexarr_core::{MediaFilter, SyncOptions, SyncOrchestrator, SyncReport};
use plexarr_models::ItemOutcome;
use serde_json::json;
use std::path::Path;
use std::time::Duration;

pub struct SyncArgs {
    pub dry_run: bool,
    pub concurrency: usize,
    pub only: Option<MediaFilter>,
    pub timeout_secs: Option<u64>,
}

pub async fn run_sync(args: SyncArgs, env_file: Option<&Path>, output: &Output) -> Result<()> {
    tracing::debug!("Sync command started");

    let config = load_config(env_file)?;
    let timeout = args.timeout_secs.map(Duration::from_secs);
    let services = Services::from_config(&config, timeout).wrap_err("Failed to set up service clients")?;

    let orchestrator = SyncOrchestrator::new(services, &config.quality_profile_name).with_options(SyncOptions {
        dry_run: args.dry_run,
        concurrency: args.concurrency,
        only: args.only,
    });

    let report = orchestrator.sync().await.wrap_err("Sync failed")?;

    match output.format() {
        OutputFormat::Human => print_human(&report, output),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let json_result = json!({
                "success": true,
                "dry_run": report.dry_run,
                "duration_seconds": report.duration.as_secs_f64(),
                "summary": {
                    "total": report.total(),
                    "added": report.added(),
                    "pruned": report.pruned(),
                    "failed": report.failed(),
                    "skipped": report.skipped(),
                    "would_add": report.would_add(),
                },
                "report": serde_json::to_value(&report)?,
            });
            output.json(&json_result);
        }
    }

    Ok(())
}

fn print_human(report: &SyncReport, output: &Output) {
    if report.total() == 0 {
        output.info("Watchlist is empty, nothing to do.");
        return;
    }

    if !output.is_quiet() {
        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Type").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Result").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for entry in &report.entries {
            let title = match entry.year {
                Some(year) => format!("{} ({})", entry.title, year),
                None => entry.title.clone(),
            };
            table.add_row(vec![
                Cell::new(title),
                Cell::new(entry.media_type.as_str()),
                Cell::new(entry.outcome.summary()).fg(outcome_color(&entry.outcome)),
            ]);
        }
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        println!("{}", table);
    }

    if report.dry_run {
        output.success(format!(
            "Dry run completed: {} of {} items would be added in {:?}",
            report.would_add(),
            report.total(),
            report.duration
        ));
    } else {
        output.success(format!(
            "Sync completed: {} added, {} removed from watchlist, {} skipped in {:?}",
            report.added(),
            report.pruned(),
            report.skipped(),
            report.duration
        ));
    }

    if report.failed() > 0 {
        output.warn(format!(
            "{} item(s) could not be added and stay on the watchlist",
            report.failed()
        ));
    }
    let unpruned = report.added() - report.pruned();
    if unpruned > 0 {
        output.warn(format!(
            "{} added item(s) could not be removed from the watchlist; the next run retries",
            unpruned
        ));
    }
}

fn outcome_color(outcome: &ItemOutcome) -> Color {
    match outcome {
        ItemOutcome::Added { pruned: true } => Color::Green,
        ItemOutcome::Added { pruned: false } | ItemOutcome::Skipped { .. } => Color::Yellow,
        ItemOutcome::DryRun { .. } => Color::Cyan,
        ItemOutcome::Unresolved | ItemOutcome::AddFailed { .. } => Color::Red,
    }
}
