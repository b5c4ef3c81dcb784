use std::{fmt::Display, str::FromStr};

use crate::{CodecError, WorkoutKind};

/// One raw record from the sensor: an activity code and its positional readings.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    pub kind: WorkoutKind,
    pub params: Vec<f64>,
}

impl SensorPackage {
    pub fn new(kind: WorkoutKind, params: Vec<f64>) -> Self {
        Self { kind, params }
    }

    /// Parses `CODE v1 v2 ...`. Values may be separated by whitespace, commas or both.
    pub fn from_line(line: &str) -> Result<Self, CodecError> {
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());

        let kind = fields.next().ok_or(CodecError::EmptyPackage)?.parse::<WorkoutKind>()?;
        let params = fields
            .enumerate()
            .map(|(i, field)| {
                field.parse::<f64>().map_err(|_| CodecError::InvalidNumber {
                    position: i + 1,
                    value: field.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { kind, params })
    }
}

impl FromStr for SensorPackage {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl Display for SensorPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}

/// Parses a multi-line package feed. Blank lines and `#` comments are skipped.
pub fn parse_packages(text: &str) -> Result<Vec<SensorPackage>, CodecError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| {
            SensorPackage::from_line(content).map_err(|source| CodecError::Line {
                line,
                source: Box::new(source),
            })
        })
        .collect()
}
