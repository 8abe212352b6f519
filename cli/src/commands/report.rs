use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use svcmap_common::config::Config;
use svcmap_common::models::TableRow;
use svcmap_core::source::{self, Harvest};
use svcmap_core::{aggregate, discovery, report as renderer};
use tracing::{Span, info, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::{colors, format, print, progress};

pub fn report(cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let files: Vec<PathBuf> = discovery::find_scan_files(&cfg.nmap_dir, &cfg.extension)
        .context("Error getting files")?;
    info!(
        "Found {} '.{}' files in {}",
        files.len(),
        cfg.extension,
        cfg.nmap_dir.display()
    );

    let harvest: Harvest = parse_files(&files, cfg);
    for failure in &harvest.failures {
        warn!("Skipping {}: {}", failure.path.display(), failure.error);
    }

    let rows: Vec<TableRow> = aggregate::aggregate(&harvest.observations, &cfg.service);

    let output: PathBuf = renderer::write_report(&rows, cfg).context("Error writing report")?;

    report_ends(&rows, &harvest, start_time.elapsed(), cfg);
    info!(
        "{} table written to {}",
        cfg.format.extension().to_uppercase(),
        output.display()
    );
    Ok(())
}

fn parse_files(files: &[PathBuf], cfg: &Config) -> Harvest {
    let span: Span = progress::parse_span(files.len(), cfg.quiet);
    let guard = span.enter();

    let bar: Span = span.clone();
    let harvest: Harvest = source::harvest(files, Some(Box::new(move |_: usize| bar.pb_inc(1))));

    drop(guard);
    harvest
}

fn report_ends(rows: &[TableRow], harvest: &Harvest, total_time: Duration, cfg: &Config) {
    if rows.is_empty() {
        no_rows_found(cfg);
    } else {
        print::header(&format!("{} versions", cfg.service), cfg.quiet);
        print_rows(rows, cfg);
    }
    print_summary(rows, harvest, total_time, cfg);
}

fn no_rows_found(cfg: &Config) {
    print::header("zero matches", cfg.quiet);
    if cfg.quiet == 0 {
        print::no_results(&cfg.service);
    }
}

fn print_rows(rows: &[TableRow], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, row) in rows.iter().enumerate() {
        print::tree_head(idx, &format::version_heading(row));
        print::as_tree_one_level(format::row_to_details(row));
        if idx + 1 != rows.len() {
            print::print("");
        }
    }
}

fn print_summary(rows: &[TableRow], harvest: &Harvest, total_time: Duration, cfg: &Config) {
    let host_count: usize = rows.iter().map(TableRow::host_count).sum();
    let versions: ColoredString = format!("{} versions", rows.len()).bold().green();
    let hosts: ColoredString = format!("{host_count} services").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Report Complete: {versions} across {hosts} in {total_time}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print_counts(harvest, &cfg.nmap_dir);
            print::centerln(&output);
        }
        _ => info!("{}", output.color(colors::TEXT_DEFAULT)),
    }
}

fn print_counts(harvest: &Harvest, root: &Path) {
    print::aligned_line("Root", root.display().to_string());
    print::aligned_line("Parsed", harvest.files_read.to_string());

    let skipped: usize = harvest.failures.len();
    let skipped: ColoredString = match skipped {
        0 => skipped.to_string().normal(),
        _ => skipped.to_string().yellow().bold(),
    };
    print::aligned_line("Skipped", skipped);
    print::aligned_line("Records", harvest.observations.len().to_string());
}
