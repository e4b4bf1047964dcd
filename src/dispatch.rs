use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ConversionError, DOCUMENT_SAMPLE_CHARS, TEXT_SAMPLE_CHARS};
use crate::extract::Dialect;
use crate::extract::labels::LABEL_TABLE_VERSION;
use crate::model::{ConversionReport, PageRange, VoterRecord};
use crate::reconstruct::DocumentReconstructor;
use crate::serialize::records_to_csv;
use crate::util::{now_utc_string, truncate_chars};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputKind {
    Text,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionInput {
    Text(String),
    Document { bytes: Vec<u8>, range: PageRange },
}

#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub records: Vec<VoterRecord>,
    pub csv: String,
    pub total_pages: Option<usize>,
    pub range: Option<PageRange>,
}

pub fn detect_input(
    raw: Vec<u8>,
    kind: Option<InputKind>,
    range: PageRange,
) -> Result<ConversionInput, ConversionError> {
    let kind = kind.unwrap_or_else(|| {
        if raw.starts_with(PDF_MAGIC) {
            InputKind::Document
        } else {
            InputKind::Text
        }
    });

    match kind {
        InputKind::Document => Ok(ConversionInput::Document { bytes: raw, range }),
        InputKind::Text => {
            if let Ok(Value::Object(payload)) = serde_json::from_slice::<Value>(&raw) {
                return payload
                    .get("text")
                    .and_then(Value::as_str)
                    .map(|text| ConversionInput::Text(text.to_string()))
                    .ok_or(ConversionError::EmptyInput);
            }
            String::from_utf8(raw)
                .map(ConversionInput::Text)
                .map_err(|_| ConversionError::UnreadableInput)
        }
    }
}

pub fn convert(
    input: &ConversionInput,
    reconstructor: &dyn DocumentReconstructor,
) -> Result<ConversionOutcome, ConversionError> {
    match input {
        ConversionInput::Text(text) => convert_text(text),
        ConversionInput::Document { bytes, range } => {
            convert_document(bytes, *range, reconstructor)
        }
    }
}

pub fn convert_text(text: &str) -> Result<ConversionOutcome, ConversionError> {
    if text.trim().is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    info!(
        chars = text.chars().count(),
        dialect = Dialect::Pasted.as_str(),
        label_table = LABEL_TABLE_VERSION,
        "parsing text input"
    );
    let records = Dialect::Pasted.parse(text);
    info!(records = records.len(), "parsed voters from text");

    if records.is_empty() {
        warn!("no voter header lines recognized in text input");
        return Err(ConversionError::NoRecordsFound {
            reason: "No voters found. Make sure the text includes voter entries with format like: \"29,094 MZB1824747 230/8/378\"".to_string(),
            text_sample: truncate_chars(text, TEXT_SAMPLE_CHARS),
            total_pages: None,
        });
    }

    let csv = records_to_csv(&records)?;
    Ok(ConversionOutcome {
        records,
        csv,
        total_pages: None,
        range: None,
    })
}

pub fn convert_document(
    document: &[u8],
    range: PageRange,
    reconstructor: &dyn DocumentReconstructor,
) -> Result<ConversionOutcome, ConversionError> {
    if document.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    info!(
        bytes = document.len(),
        from_page = range.from_page,
        to_page = range.to_page,
        dialect = Dialect::Positional.as_str(),
        label_table = LABEL_TABLE_VERSION,
        "parsing document input"
    );
    let reconstructed = reconstructor.reconstruct(document, range)?;
    let records = Dialect::Positional.parse(&reconstructed.text);
    info!(
        records = records.len(),
        total_pages = reconstructed.total_pages,
        "parsed voters from document"
    );

    if records.is_empty() {
        warn!(
            total_pages = reconstructed.total_pages,
            "no voter anchor lines recognized in document"
        );
        return Err(ConversionError::NoRecordsFound {
            reason: "No voters found in the PDF. Make sure it's in the correct Marathi voter list format.".to_string(),
            text_sample: truncate_chars(&reconstructed.text, DOCUMENT_SAMPLE_CHARS),
            total_pages: Some(reconstructed.total_pages),
        });
    }

    let csv = records_to_csv(&records)?;
    Ok(ConversionOutcome {
        records,
        csv,
        total_pages: Some(reconstructed.total_pages),
        range: Some(reconstructed.range),
    })
}

pub fn build_report(
    outcome: ConversionOutcome,
    sample_size: usize,
    source_sha256: String,
) -> ConversionReport {
    ConversionReport {
        success: true,
        total_voters: outcome.records.len(),
        sample: outcome.records.into_iter().take(sample_size).collect(),
        csv: outcome.csv,
        generated_at: now_utc_string(),
        source_sha256,
        total_pages: outcome.total_pages,
        pages_processed: outcome.range.map(|range| range.label()),
    }
}
