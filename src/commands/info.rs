use anyhow::{Context, Result};
use tracing::info;

use crate::cli::InfoArgs;
use crate::model::DocumentInfo;
use crate::reconstruct::{DocumentReconstructor, PopplerReconstructor};
use crate::util::{read_input, sha256_bytes};

pub fn run(args: InfoArgs) -> Result<()> {
    let document = read_input(&args.input)?;
    let (total_pages, source) = PopplerReconstructor
        .page_count(&document)
        .with_context(|| format!("failed to count pages in {}", args.input.display()))?;

    let report = DocumentInfo {
        file_name: args
            .input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("-")
            .to_string(),
        file_size: document.len(),
        sha256: sha256_bytes(&document),
        total_pages,
        page_count_source: source.as_str().to_string(),
        pdftotext: PopplerReconstructor::tool_version("pdftotext"),
        pdfinfo: PopplerReconstructor::tool_version("pdfinfo"),
    };

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize document info")?;
        println!("{rendered}");
    }

    info!(
        file = %report.file_name,
        file_size = report.file_size,
        total_pages = report.total_pages,
        page_count_source = %report.page_count_source,
        pdftotext = %report.pdftotext.clone().unwrap_or_else(|| "unavailable".to_string()),
        "document info"
    );

    Ok(())
}
