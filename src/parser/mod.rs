//! Sensor report parser
//!
//! Parses lines of the form
//! `Sensor at x=2, y=18: closest beacon is at x=-2, y=15`
//! into [`Sensor`] values.

use std::fs;
use std::path::Path;

use crate::sensor::Sensor;

const SENSOR_PREFIX: &str = "Sensor at ";
const BEACON_SEPARATOR: &str = ": closest beacon is at ";

/// Parse error with location information
#[derive(Debug, Clone, thiserror::Error)]
#[error("line {line_number}: {message}\n  | {line_content}")]
pub struct ParseError {
    pub line_number: usize,
    pub message: String,
    pub line_content: String,
}

impl ParseError {
    pub fn new(
        line_number: usize,
        message: impl Into<String>,
        line_content: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            message: message.into(),
            line_content: line_content.into(),
        }
    }
}

/// Errors from loading a report file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parse a signed integer coordinate
fn parse_coordinate(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty coordinate".to_string());
    }
    s.parse::<i64>()
        .map_err(|e| format!("invalid coordinate '{}': {}", s, e))
}

/// Parse `x=<int>, y=<int>`
pub fn parse_point(s: &str) -> Result<(i64, i64), String> {
    let (x_part, y_part) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x=<int>, y=<int>', got '{}'", s))?;

    let x = x_part
        .trim()
        .strip_prefix("x=")
        .ok_or_else(|| format!("expected 'x=' in '{}'", x_part.trim()))?;
    let y = y_part
        .trim()
        .strip_prefix("y=")
        .ok_or_else(|| format!("expected 'y=' in '{}'", y_part.trim()))?;

    Ok((parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Parse a single sensor report line (without line context)
pub fn parse_sensor(line: &str) -> Result<Sensor, String> {
    let rest = line
        .trim()
        .strip_prefix(SENSOR_PREFIX)
        .ok_or_else(|| format!("expected line to start with '{}'", SENSOR_PREFIX.trim()))?;

    let (sensor_part, beacon_part) = rest
        .split_once(BEACON_SEPARATOR)
        .ok_or_else(|| "missing closest beacon report".to_string())?;

    let (x, y) = parse_point(sensor_part)?;
    let (beacon_x, beacon_y) = parse_point(beacon_part)?;

    Sensor::new(x, y, beacon_x, beacon_y).map_err(|e| e.to_string())
}

/// Parse every report in `source`, skipping blank lines
pub fn parse_sensor_reports(source: &str) -> Result<Vec<Sensor>, ParseError> {
    let mut sensors = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let sensor = parse_sensor(line).map_err(|msg| ParseError::new(index + 1, msg, line))?;
        sensors.push(sensor);
    }

    Ok(sensors)
}

/// Read and parse a report file
pub fn parse_file(path: &Path) -> Result<Vec<Sensor>, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_sensor_reports(&source)?)
}

/// The fourteen-sensor example report
#[cfg(test)]
pub(crate) fn example_sensors() -> Vec<Sensor> {
    parse_sensor_reports(include_str!("../../inputs/example.txt"))
        .expect("example input should parse")
}
