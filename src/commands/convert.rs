use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{ConvertArgs, DialectArg};
use crate::dispatch::{ConversionOutcome, InputKind, build_report, convert, detect_input};
use crate::error::ConversionError;
use crate::model::{ConversionFailure, PageRange};
use crate::reconstruct::PopplerReconstructor;
use crate::util::{read_input, sha256_bytes, write_json_pretty, write_text};

pub fn run(args: ConvertArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let source_sha256 = sha256_bytes(&raw);
    let range = PageRange::lenient(args.from_page.as_deref(), args.to_page.as_deref());

    info!(
        input = %args.input.display(),
        dialect = args.dialect.as_str(),
        bytes = raw.len(),
        from_page = range.from_page,
        to_page = range.to_page,
        "starting conversion"
    );

    let outcome = match convert_raw(raw, args.dialect, range) {
        Ok(outcome) => outcome,
        Err(error) => {
            emit_failure(&args, &error.failure())?;
            return Err(error).context("conversion failed");
        }
    };

    if let Some(path) = &args.output {
        write_text(path, &outcome.csv)?;
        info!(path = %path.display(), records = outcome.records.len(), "wrote csv");
    }

    let csv_to_stdout = args.output.is_none() && !args.json;
    let report = build_report(outcome, args.sample_size, source_sha256);

    if let Some(path) = &args.report {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote conversion report");
    }

    if args.json {
        print_json(&report)?;
    } else if csv_to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(report.csv.as_bytes())
            .context("failed to write csv to stdout")?;
    }

    info!(
        total_voters = report.total_voters,
        total_pages = report.total_pages.unwrap_or_default(),
        pages_processed = %report.pages_processed.clone().unwrap_or_default(),
        "conversion completed"
    );

    Ok(())
}

fn convert_raw(
    raw: Vec<u8>,
    dialect: DialectArg,
    range: PageRange,
) -> Result<ConversionOutcome, ConversionError> {
    let kind = match dialect {
        DialectArg::Auto => None,
        DialectArg::Pasted => Some(InputKind::Text),
        DialectArg::Document => Some(InputKind::Document),
    };

    let input = detect_input(raw, kind, range)?;
    convert(&input, &PopplerReconstructor)
}

fn emit_failure(args: &ConvertArgs, failure: &ConversionFailure) -> Result<()> {
    if let Some(path) = &args.report {
        write_json_pretty(path, failure)?;
        info!(path = %path.display(), "wrote failure report");
    }
    if args.json {
        print_json(failure)?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize json")?;
    println!("{rendered}");
    Ok(())
}
