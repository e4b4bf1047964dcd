use regex::Regex;
use tracing::debug;

use crate::extract::labels::STANDALONE_NAME_LABELS;
use crate::model::{Relation, VoterRecord};
use crate::normalize::{
    classify_gender, convert_numerals, normalize_house_number, remove_photo_markers, split_lines,
    strip_noise,
};

struct PastedPatterns {
    header: Regex,
    full_name: Regex,
    father: Regex,
    husband: Regex,
    house: Regex,
    age_and_gender: Regex,
    age: Regex,
    gender: Regex,
}

impl PastedPatterns {
    fn new() -> Self {
        Self {
            header: Regex::new(
                r"(?i)^([0-9]{1,3}(?:,[0-9]{3})*|[0-9]{4,6})\s+([A-Z0-9/]+)\s+([0-9]+/[0-9]+/[0-9]+)",
            )
            .expect("valid header regex"),
            full_name: Regex::new(r"(?i)मतदाराचे\s*पूर्ण\s*(?:नाव|नांव)?[:\s]*(.+)?")
                .expect("valid full name regex"),
            father: Regex::new(r"(?i)वडिलांचे\s*(?:नाव|नांव)\s*[:\s]*(.+)?")
                .expect("valid father label regex"),
            husband: Regex::new(r"(?i)पतीचे\s*(?:नाव|नांव)\s*[:\s]*(.+)?")
                .expect("valid husband label regex"),
            house: Regex::new(r"(?i)घर\s*क्रमांक\s*[:\s]*(.+)?").expect("valid house regex"),
            age_and_gender: Regex::new(r"(?i)वय\s*[:\s]*([0-9]+).*?लिंग\s*[:\s]*(\S+)")
                .expect("valid age and gender regex"),
            age: Regex::new(r"(?i)वय\s*[:\s]*([0-9]+)").expect("valid age regex"),
            gender: Regex::new(r"(?i)लिंग\s*[:\s]*(\S+)").expect("valid gender regex"),
        }
    }
}

pub fn parse_pasted_text(text: &str) -> Vec<VoterRecord> {
    let patterns = PastedPatterns::new();
    let cleaned = remove_photo_markers(&convert_numerals(text));
    let lines = split_lines(&cleaned);

    let (current, mut records) = lines.iter().fold(
        (None::<VoterRecord>, Vec::<VoterRecord>::new()),
        |(current, mut records), line| {
            let (next, completed) = step(&patterns, current, line);
            records.extend(completed.filter(VoterRecord::is_retained));
            (next, records)
        },
    );

    if let Some(last) = current.filter(VoterRecord::is_retained) {
        records.push(last);
    }

    debug!(lines = lines.len(), records = records.len(), "parsed pasted text");
    records
}

fn step(
    patterns: &PastedPatterns,
    current: Option<VoterRecord>,
    line: &str,
) -> (Option<VoterRecord>, Option<VoterRecord>) {
    if STANDALONE_NAME_LABELS.contains(&line) {
        return (current, None);
    }

    if let Some(started) = start_record(patterns, line) {
        return (Some(started), current);
    }

    let Some(mut record) = current else {
        return (None, None);
    };

    apply_field_line(patterns, &mut record, line);
    (Some(record), None)
}

fn start_record(patterns: &PastedPatterns, line: &str) -> Option<VoterRecord> {
    let captures = patterns.header.captures(line)?;
    let serial = captures.get(1)?.as_str().replace(',', "");
    let voter_id = captures.get(2)?.as_str();
    let section_code = captures.get(3)?.as_str();

    Some(VoterRecord::new(
        serial.parse::<u32>().ok(),
        voter_id,
        section_code,
    ))
}

fn trailing_value(captures: &regex::Captures<'_>, group: usize) -> Option<String> {
    captures.get(group).map(|value| strip_noise(value.as_str()))
}

fn apply_field_line(patterns: &PastedPatterns, record: &mut VoterRecord, line: &str) {
    if let Some(captures) = patterns.full_name.captures(line) {
        if let Some(name) = trailing_value(&captures, 1) {
            record.full_name = name;
        }
        return;
    }

    if let Some(captures) = patterns.father.captures(line) {
        if let Some(name) = trailing_value(&captures, 1) {
            record.relative_name = name;
        }
        record.relation = Relation::Father;
        return;
    }

    if let Some(captures) = patterns.husband.captures(line) {
        if let Some(name) = trailing_value(&captures, 1) {
            record.relative_name = name;
        }
        record.relation = Relation::Husband;
        return;
    }

    if let Some(house) = patterns
        .house
        .captures(line)
        .and_then(|captures| captures.get(1))
    {
        record.house_no = normalize_house_number(house.as_str());
        return;
    }

    if let Some(captures) = patterns.age_and_gender.captures(line) {
        if let (Some(age), Some(gender)) = (captures.get(1), captures.get(2)) {
            record.age = age.as_str().to_string();
            record.gender = classify_gender(gender.as_str());
            return;
        }
    }

    if let Some(age) = patterns.age.captures(line).and_then(|captures| captures.get(1)) {
        record.age = age.as_str().to_string();
    }
    if let Some(gender) = patterns
        .gender
        .captures(line)
        .and_then(|captures| captures.get(1))
    {
        record.gender = classify_gender(gender.as_str());
    }
}
