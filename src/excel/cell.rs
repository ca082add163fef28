use std::fmt;

use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, Timelike};
use serde_json::{Value, json};

/// A single spreadsheet value after decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Empty => Value::Null,
            Cell::Text(s) => json!(s),
            Cell::Number(n) => {
                if is_whole(*n) {
                    json!(*n as i64)
                } else {
                    json!(n)
                }
            }
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,

            Data::String(s) if s.is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),

            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),

            Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),

            Data::Error(e) => Cell::Text(e.to_string()),

            Data::DateTime(dt) => date_cell(dt),

            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("NaN"),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => {
                if is_whole(*n) {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

fn is_whole(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() < 1e15
}

// Serial of 9999-12-31 plus the 1904 epoch shift; Excel shows nothing later as a date
const MAX_DATE_SERIAL: f64 = 2_958_465.0 + 1_462.0;

// Date-formatted serials decode to ISO text; durations and serials outside the
// calendar range stay numeric
fn date_cell(dt: &ExcelDateTime) -> Cell {
    let serial = dt.as_f64();
    if dt.is_duration() || !(0.0..=MAX_DATE_SERIAL).contains(&serial) {
        return Cell::Number(serial);
    }

    match dt.as_datetime() {
        Some(datetime) => Cell::Text(iso_string(&datetime)),
        None => Cell::Number(serial),
    }
}

fn iso_string(datetime: &NaiveDateTime) -> String {
    if datetime.num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
