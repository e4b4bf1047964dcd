use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Utc;
use regex::Regex;
use tracing::{debug, info, warn};

use super::{
    DocumentReconstructor, PageCountSource, PositionedFragment, ReconstructedDocument,
    estimate_page_count, join_pages,
};
use crate::error::ConversionError;
use crate::model::PageRange;

#[derive(Debug, Default, Clone)]
pub struct PopplerReconstructor;

struct TempDocument {
    path: PathBuf,
}

impl TempDocument {
    fn write(document: &[u8]) -> Result<Self, ConversionError> {
        let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let path = std::env::temp_dir().join(format!(
            "voterroll_{}_{}.pdf",
            std::process::id(),
            stamp
        ));
        fs::write(&path, document)?;
        Ok(Self { path })
    }
}

impl Drop for TempDocument {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl PopplerReconstructor {
    pub fn tool_version(program: &str) -> Option<String> {
        let output = Command::new(program).arg("-v").output().ok()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let source = if stdout.trim().is_empty() {
            stderr.trim()
        } else {
            stdout.trim()
        };

        source
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
    }

    fn page_count_from_pdfinfo(pdf_path: &Path) -> Result<usize, String> {
        let output = Command::new("pdfinfo")
            .arg(pdf_path)
            .output()
            .map_err(|error| format!("failed to execute pdfinfo: {error}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "pdfinfo returned non-zero exit status: {}",
                stderr.trim()
            ));
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .find_map(|line| line.strip_prefix("Pages:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .ok_or_else(|| "pdfinfo output did not include a page count".to_string())
    }

    // -raw keeps words in content-stream order.
    fn bbox_options(range: PageRange) -> Vec<String> {
        vec![
            "-bbox".to_string(),
            "-raw".to_string(),
            "-enc".to_string(),
            "UTF-8".to_string(),
            "-f".to_string(),
            range.from_page.to_string(),
            "-l".to_string(),
            range.to_page.to_string(),
        ]
    }

    fn bbox_html(pdf_path: &Path, range: PageRange) -> Result<String, String> {
        let output = Command::new("pdftotext")
            .args(Self::bbox_options(range))
            .arg(pdf_path)
            .arg("-")
            .output()
            .map_err(|error| format!("failed to execute pdftotext: {error}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "pdftotext returned non-zero exit status: {}",
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).replace('\u{0000}', ""))
    }
}

impl DocumentReconstructor for PopplerReconstructor {
    fn page_count(&self, document: &[u8]) -> Result<(usize, PageCountSource), ConversionError> {
        let temp = TempDocument::write(document)?;
        match Self::page_count_from_pdfinfo(&temp.path) {
            Ok(count) => Ok((count, PageCountSource::DocumentInfo)),
            Err(message) => {
                warn!(reason = %message, "pdfinfo unavailable, scanning page objects");
                Ok(estimate_page_count(document))
            }
        }
    }

    fn reconstruct(
        &self,
        document: &[u8],
        range: PageRange,
    ) -> Result<ReconstructedDocument, ConversionError> {
        let temp = TempDocument::write(document)?;

        let total_pages = match Self::page_count_from_pdfinfo(&temp.path) {
            Ok(count) => count,
            Err(message) => {
                let (estimate, source) = estimate_page_count(document);
                return Err(ConversionError::ReconstructionFailure {
                    message,
                    total_pages: (source == PageCountSource::BinaryScan).then_some(estimate),
                });
            }
        };

        let effective = range.clamp_to(total_pages);
        info!(
            total_pages,
            from_page = effective.from_page,
            to_page = effective.to_page,
            "reconstructing document text"
        );

        if effective.is_empty() {
            warn!(total_pages, "requested page range is outside the document");
            return Ok(ReconstructedDocument {
                text: String::new(),
                total_pages,
                range: effective,
            });
        }

        let html = Self::bbox_html(&temp.path, effective).map_err(|message| {
            ConversionError::ReconstructionFailure {
                message,
                total_pages: Some(total_pages),
            }
        })?;

        let pages = parse_bbox_pages(&html);
        let text = join_pages(&pages);
        debug!(pages = pages.len(), chars = text.chars().count(), "reconstructed text");

        Ok(ReconstructedDocument {
            text,
            total_pages,
            range: effective,
        })
    }
}

pub fn parse_bbox_pages(html: &str) -> Vec<Vec<PositionedFragment>> {
    let word_regex = Regex::new(
        r#"<word xMin="[^"]*" yMin="[^"]*" xMax="[^"]*" yMax="([^"]*)">(.*?)</word>"#,
    )
    .expect("valid bbox word regex");

    html.split("<page ")
        .skip(1)
        .map(|page| {
            word_regex
                .captures_iter(page)
                .filter_map(|captures| {
                    let y = captures.get(1)?.as_str().parse::<f64>().ok()?;
                    let text = decode_entities(captures.get(2)?.as_str());
                    Some(PositionedFragment { text, y })
                })
                .collect()
        })
        .collect()
}

fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
