use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ConversionError;
use crate::model::VoterRecord;
use crate::section::parse_section_code;

pub const CSV_HEADERS: [&str; 14] = [
    "AC_NO",
    "PART_NO",
    "SECTION_NO",
    "SLNOINPART",
    "C_HOUSE_NO",
    "FM_NAME_V1",
    "LASTNAME_V1",
    "RLN_TYPE",
    "RLN_FM_NM_V1",
    "RLN_L_NM_V1",
    "EPIC_NO",
    "STATUS_TYPE",
    "GENDER",
    "AGE",
];

pub const STATUS_TYPE: &str = "N";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

pub fn split_name(name: &str) -> NameParts {
    let mut tokens = name.split(' ').collect::<Vec<&str>>();
    let last = tokens.pop().unwrap_or_default().to_string();

    NameParts {
        first: tokens.join(" "),
        last,
    }
}

pub fn record_row(record: &VoterRecord) -> [String; 14] {
    let section = parse_section_code(&record.section_code);
    let name = split_name(&record.full_name);
    let relative = split_name(&record.relative_name);

    [
        section.constituency_no,
        section.part_no,
        section.section_no,
        record
            .serial_no
            .map(|serial| serial.to_string())
            .unwrap_or_default(),
        record.house_no.clone(),
        name.first,
        name.last,
        record.relation.as_str().to_string(),
        relative.first,
        relative.last,
        record.voter_id.clone(),
        STATUS_TYPE.to_string(),
        record.gender.as_str().to_string(),
        record.age.clone(),
    ]
}

pub fn records_to_csv(records: &[VoterRecord]) -> Result<String, ConversionError> {
    let mut output = CSV_HEADERS.join(",").into_bytes();
    output.push(b'\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for record in records {
        writer.write_record(record_row(record))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| ConversionError::Io(error.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
