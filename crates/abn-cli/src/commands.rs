use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use abn_core::{BatchReport, CheckOutcome, ValidationOptions, explain};

use crate::cli::{BatchArgs, CheckArgs, ExplainArgs, OutputFormatArg};
use crate::input::{read_csv_column, read_lines};
use crate::logging::redact_value;
use crate::summary::{render_explain, render_json, render_plain, render_table};
use crate::types::CommandOutput;

pub fn run_check(
    args: &CheckArgs,
    options: &ValidationOptions,
    styled: bool,
) -> Result<CommandOutput> {
    let report = BatchReport::check_all(args.values.iter().map(String::as_str), options);
    for outcome in &report.outcomes {
        log_outcome(outcome);
    }
    let output = match args.format {
        OutputFormatArg::Plain => render_plain(&report.outcomes),
        OutputFormatArg::Table => render_table(&report, false, styled),
        OutputFormatArg::Json => render_json(&report)?,
    };
    Ok(CommandOutput {
        output,
        has_errors: report.has_errors(),
    })
}

pub fn run_batch(
    args: &BatchArgs,
    options: &ValidationOptions,
    styled: bool,
) -> Result<CommandOutput> {
    let span = info_span!("batch", path = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let values = match &args.column {
        Some(column) => read_csv_column(&args.input, column)?,
        None => read_lines(&args.input)?,
    };
    let report = BatchReport::check_all(values, options);
    for outcome in &report.outcomes {
        log_outcome(outcome);
    }
    info!(
        total = report.summary.total,
        valid = report.summary.valid,
        invalid = report.summary.invalid,
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    let output = match args.format {
        OutputFormatArg::Plain => {
            if args.invalid_only {
                let failures: Vec<CheckOutcome> = report.failures().cloned().collect();
                render_plain(&failures)
            } else {
                render_plain(&report.outcomes)
            }
        }
        OutputFormatArg::Table => render_table(&report, args.invalid_only, styled),
        OutputFormatArg::Json => {
            if args.invalid_only {
                // Totals still describe the whole file.
                render_json(&BatchReport {
                    outcomes: report.failures().cloned().collect(),
                    summary: report.summary.clone(),
                })?
            } else {
                render_json(&report)?
            }
        }
    };
    Ok(CommandOutput {
        output,
        has_errors: report.has_errors(),
    })
}

pub fn run_explain(
    args: &ExplainArgs,
    options: &ValidationOptions,
    styled: bool,
) -> Result<CommandOutput> {
    let breakdown = explain(&args.value, options)
        .with_context(|| format!("cannot explain {:?}", args.value))?;
    Ok(CommandOutput {
        has_errors: !breakdown.is_valid(),
        output: render_explain(&breakdown, styled),
    })
}

fn log_outcome(outcome: &CheckOutcome) {
    match &outcome.result {
        Ok(_) => debug!(
            record = outcome.record,
            input = redact_value(&outcome.input),
            "valid"
        ),
        Err(error) => debug!(
            record = outcome.record,
            input = redact_value(&outcome.input),
            reason = error.code(),
            "invalid"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("abn-cli-commands-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn check_flags_any_failure() {
        let args = CheckArgs {
            values: vec!["31 103 572 158".to_string(), "31 103 572 157".to_string()],
            format: OutputFormatArg::Plain,
        };
        let result = run_check(&args, &ValidationOptions::default(), false).unwrap();
        assert!(result.has_errors);
        assert!(result.output.starts_with("31 103 572 158\n"));
    }

    #[test]
    fn check_all_valid() {
        let args = CheckArgs {
            values: vec!["51824753556".to_string()],
            format: OutputFormatArg::Json,
        };
        let result = run_check(&args, &ValidationOptions::default(), false).unwrap();
        assert!(!result.has_errors);
        assert!(result.output.contains("\"51 824 753 556\""));
    }

    #[test]
    fn batch_invalid_only_json_keeps_totals() {
        let path = temp_file("batch.txt", "31103572158\n31103572157\n");
        let args = BatchArgs {
            input: path.clone(),
            column: None,
            format: OutputFormatArg::Json,
            invalid_only: true,
        };
        let result = run_batch(&args, &ValidationOptions::default(), false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(json["outcomes"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["outcomes"][0]["record"], 2);
        assert_eq!(json["summary"]["total"], 2);
        assert!(result.has_errors);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn batch_respects_strict_options() {
        let path = temp_file("strict.csv", "abn\n31103572158001\n");
        let args = BatchArgs {
            input: path.clone(),
            column: Some("abn".to_string()),
            format: OutputFormatArg::Plain,
            invalid_only: false,
        };
        let lenient = run_batch(&args, &ValidationOptions::default(), false).unwrap();
        assert_eq!(lenient.output, "31 103 572 158 001\n");
        let strict = run_batch(&args, &ValidationOptions::strict(), false).unwrap();
        assert!(strict.has_errors);
        assert!(strict.output.contains("invalid_length"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn explain_rejects_bad_length() {
        let args = ExplainArgs {
            value: "123".to_string(),
        };
        let error = run_explain(&args, &ValidationOptions::default(), false).unwrap_err();
        let message = format!("{error:#}");
        assert!(message.starts_with("cannot explain \"123\""));
        assert!(message.contains("ABN must contain 11 or 14 digits, found 3"));
    }
}
