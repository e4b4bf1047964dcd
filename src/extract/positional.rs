use std::collections::HashSet;
use std::ops::RangeInclusive;

use regex::Regex;
use tracing::debug;

use crate::extract::labels::{
    FATHER_LABEL, FEMALE_TOKEN, HOUSE_ABSENT_TOKEN, HUSBAND_LABEL, MALE_TOKEN, NON_NAME_MARKERS,
};
use crate::model::{Gender, Relation, VoterRecord};
use crate::normalize::{convert_numerals, split_lines};

pub const RELATION_WINDOW: usize = 20;
pub const NAME_WINDOW: usize = 15;
pub const SERIAL_WINDOW: usize = 25;
pub const AGE_WINDOW: usize = 15;
pub const FORWARD_WINDOW: usize = 10;

const SERIAL_LIMIT: u32 = 50_000;
const AGE_RANGE: RangeInclusive<u32> = 18..=120;

struct PositionalPatterns {
    anchor: Regex,
    anchor_composite: Regex,
    next_block: Regex,
    digits_only: Regex,
    colons_only: Regex,
    serial: Regex,
    age: Regex,
}

impl PositionalPatterns {
    fn new() -> Self {
        Self {
            anchor: Regex::new(
                r"(?i)^([A-Z]{2,3}[0-9]{6,10}|[A-Z]+/[0-9]+/[0-9]+)\s+([0-9]+/[0-9]+/[0-9]+)$",
            )
            .expect("valid anchor regex"),
            anchor_composite: Regex::new(r"(?i)^([A-Z0-9]{10,15})\s+([0-9]+/[0-9]+/[0-9]+)$")
                .expect("valid composite anchor regex"),
            next_block: Regex::new(r"(?i)^[A-Z]{2,3}[0-9]{6,10}\s+[0-9]+/[0-9]+/[0-9]+")
                .expect("valid next block regex"),
            digits_only: Regex::new(r"^[0-9]+$").expect("valid digits regex"),
            colons_only: Regex::new(r"^:+$").expect("valid colons regex"),
            serial: Regex::new(r"^[0-9]{1,5}$").expect("valid serial regex"),
            age: Regex::new(r"^[0-9]{2,3}$").expect("valid age regex"),
        }
    }

    fn anchor<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self
            .anchor
            .captures(line)
            .or_else(|| self.anchor_composite.captures(line))?;
        Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
    }
}

pub fn parse_positional_text(text: &str) -> Vec<VoterRecord> {
    let patterns = PositionalPatterns::new();
    let converted = convert_numerals(text);
    let lines = split_lines(&converted);

    let (_, records) = lines.iter().enumerate().fold(
        (HashSet::<String>::new(), Vec::<VoterRecord>::new()),
        |(mut seen, mut records), (index, line)| {
            let Some((voter_id, section_code)) = patterns.anchor(line) else {
                return (seen, records);
            };

            if !seen.insert(voter_id.to_string()) {
                debug!(voter_id, line = index, "skipping repeated anchor");
                return (seen, records);
            }

            let record = recover_block(&patterns, &lines, index, voter_id, section_code);
            if record.is_retained() {
                records.push(record);
            }
            (seen, records)
        },
    );

    debug!(lines = lines.len(), records = records.len(), "parsed positional text");
    records
}

fn recover_block(
    patterns: &PositionalPatterns,
    lines: &[String],
    anchor_index: usize,
    voter_id: &str,
    section_code: &str,
) -> VoterRecord {
    let mut record = VoterRecord::new(None, voter_id, section_code);

    scan_name_and_relation(lines, anchor_index, &mut record);
    scan_forward(patterns, lines, anchor_index, &mut record);
    scan_name_and_relative(patterns, lines, anchor_index, &mut record);
    record.serial_no = nearest_serial(patterns, lines, anchor_index);
    record.age = nearest_age(patterns, lines, anchor_index).unwrap_or_default();

    record
}

fn backward(lines: &[String], anchor_index: usize, window: usize) -> impl Iterator<Item = &str> {
    lines[anchor_index.saturating_sub(window)..anchor_index]
        .iter()
        .rev()
        .map(String::as_str)
}

fn forward(lines: &[String], anchor_index: usize) -> impl Iterator<Item = &str> {
    let end = (anchor_index + FORWARD_WINDOW).min(lines.len());
    lines[(anchor_index + 1).min(end)..end]
        .iter()
        .map(String::as_str)
}

fn after_colon(line: &str) -> Option<String> {
    line.strip_prefix(':').map(|rest| rest.trim().to_string())
}

fn scan_name_and_relation(lines: &[String], anchor_index: usize, record: &mut VoterRecord) {
    for line in backward(lines, anchor_index, RELATION_WINDOW) {
        if record.full_name.is_empty() {
            if let Some(name) = after_colon(line) {
                record.full_name = name;
            }
        }

        if FATHER_LABEL.found_in(line) {
            record.relation = Relation::Father;
        }
        if HUSBAND_LABEL.found_in(line) {
            record.relation = Relation::Husband;
        }
    }
}

fn scan_forward(
    patterns: &PositionalPatterns,
    lines: &[String],
    anchor_index: usize,
    record: &mut VoterRecord,
) {
    for line in forward(lines, anchor_index) {
        if MALE_TOKEN.equals(line) {
            record.gender = Gender::Male;
        } else if FEMALE_TOKEN.equals(line) {
            record.gender = Gender::Female;
        }

        if line == HOUSE_ABSENT_TOKEN {
            record.house_no.clear();
        }

        if patterns.next_block.is_match(line) {
            break;
        }
    }
}

fn scan_name_and_relative(
    patterns: &PositionalPatterns,
    lines: &[String],
    anchor_index: usize,
    record: &mut VoterRecord,
) {
    for line in backward(lines, anchor_index, NAME_WINDOW) {
        if line.starts_with(':') && line.chars().count() > 2 {
            if let Some(name) = after_colon(line) {
                record.full_name = name;
            }
        } else if !record.full_name.is_empty()
            && record.relative_name.is_empty()
            && is_relative_candidate(patterns, line)
        {
            record.relative_name = line.trim().to_string();
            break;
        }
    }
}

fn is_relative_candidate(patterns: &PositionalPatterns, line: &str) -> bool {
    !NON_NAME_MARKERS.found_in(line)
        && !patterns.colons_only.is_match(line)
        && !patterns.digits_only.is_match(line)
        && line.chars().count() > 2
}

fn nearest_serial(
    patterns: &PositionalPatterns,
    lines: &[String],
    anchor_index: usize,
) -> Option<u32> {
    backward(lines, anchor_index, SERIAL_WINDOW)
        .filter(|line| patterns.serial.is_match(line))
        .filter_map(|line| line.parse::<u32>().ok())
        .find(|value| *value < SERIAL_LIMIT)
}

fn nearest_age(
    patterns: &PositionalPatterns,
    lines: &[String],
    anchor_index: usize,
) -> Option<String> {
    backward(lines, anchor_index, AGE_WINDOW)
        .filter(|line| patterns.age.is_match(line))
        .find(|line| {
            line.parse::<u32>()
                .map(|value| AGE_RANGE.contains(&value))
                .unwrap_or(false)
        })
        .map(ToOwned::to_owned)
}
