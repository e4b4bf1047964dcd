use thiserror::Error;

use crate::model::ConversionFailure;

pub const TEXT_SAMPLE_CHARS: usize = 500;
pub const DOCUMENT_SAMPLE_CHARS: usize = 3000;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("no text or document provided")]
    EmptyInput,

    #[error("{reason}")]
    NoRecordsFound {
        reason: String,
        text_sample: String,
        total_pages: Option<usize>,
    },

    #[error("failed to extract text from PDF: {message}")]
    ReconstructionFailure {
        message: String,
        total_pages: Option<usize>,
    },

    #[error("input is neither a PDF nor UTF-8 text")]
    UnreadableInput,

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversionError {
    pub fn failure(&self) -> ConversionFailure {
        let (text_sample, total_pages) = match self {
            Self::NoRecordsFound {
                text_sample,
                total_pages,
                ..
            } => (Some(text_sample.clone()), *total_pages),
            Self::ReconstructionFailure { total_pages, .. } => (None, *total_pages),
            _ => (None, None),
        };

        ConversionFailure {
            error: self.to_string(),
            text_sample,
            total_pages,
        }
    }
}
