pub mod labels;
mod pasted;
mod positional;
#[cfg(test)]
mod tests;

pub use pasted::parse_pasted_text;
pub use positional::parse_positional_text;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dialect {
    Pasted,
    Positional,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pasted => "pasted",
            Self::Positional => "positional",
        }
    }

    pub fn parse(self, text: &str) -> Vec<crate::model::VoterRecord> {
        match self {
            Self::Pasted => parse_pasted_text(text),
            Self::Positional => parse_positional_text(text),
        }
    }
}
