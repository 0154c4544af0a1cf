use std::path::Path;

use crate::validation::{validate_dir_path, validate_language_code, validate_output_path};
use resxcat::catalog::{
    ExportOptions, ExportReport, LocaleStatus, build_catalog, write_catalog,
};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub resources: String,
    pub output: String,
    pub langs: Vec<String>,
    pub base_name: String,
    pub report_json: Option<String>,
    pub dry_run: bool,
}

fn write_report(path: &str, options: &SyncOptions, report: &ExportReport) -> Result<(), String> {
    let payload = json!({
        "resources": options.resources,
        "output": options.output,
        "langs": options.langs,
        "base_name": options.base_name,
        "dry_run": options.dry_run,
        "summary": {
            "locales_requested": report.locales_requested,
            "converted": report.converted,
            "missing_sources": report.missing_sources,
            "parse_failures": report.parse_failures,
            "total_entries": report.total_entries
        },
        "locales": report.outcomes
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    std::fs::write(path, text).map_err(|e| format!("Failed to write report JSON '{}': {}", path, e))
}

pub fn run_sync_command(opts: SyncOptions) -> Result<(), String> {
    validate_dir_path(&opts.resources)?;
    if opts.langs.is_empty() {
        return Err("At least one locale code is required".to_string());
    }
    for lang in &opts.langs {
        validate_language_code(lang)?;
    }
    if let Some(report_path) = &opts.report_json {
        validate_output_path(report_path)?;
    }

    let export_options = ExportOptions::new()
        .with_locales(opts.langs.clone())
        .with_base_name(opts.base_name.clone());
    let (catalog, report) = build_catalog(&opts.resources, &export_options);

    for outcome in &report.outcomes {
        match outcome.status {
            LocaleStatus::Converted => {
                println!("Processing {}... {} entries", outcome.source, outcome.entries);
            }
            LocaleStatus::MissingSource => {
                println!("Warning: {} not found.", outcome.source);
            }
            LocaleStatus::ParseFailed => {
                println!(
                    "Error parsing {}: {}",
                    outcome.source,
                    outcome.detail.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    println!("Locales requested: {}", report.locales_requested);
    println!("Converted: {}", report.converted);
    println!("Missing sources: {}", report.missing_sources);
    println!("Parse failures: {}", report.parse_failures);
    println!("Entries exported: {}", report.total_entries);

    if let Some(report_path) = &opts.report_json {
        write_report(report_path, &opts, &report)?;
        println!("Report JSON written: {}", report_path);
    }

    if opts.dry_run {
        println!("Dry-run mode: no files were written");
        return Ok(());
    }

    write_catalog(&catalog, &opts.output)
        .map_err(|e| format!("Error writing output to '{}': {}", opts.output, e))?;

    for resource in catalog.iter() {
        let path = Path::new(&opts.output).join(format!("{}.json", resource.locale));
        println!("Created {}", path.display());
    }

    println!("✅ Locale export complete: {}", opts.output);
    Ok(())
}
