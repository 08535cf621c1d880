//! Serde helpers for financial statement payloads.
//!
//! Rows come straight from Postgres through the CRM API, so `NUMERIC` columns
//! arrive as JSON strings (`"500000000000.00"`) and `fiscal_year` may be either
//! a number or a string. These helpers coerce both shapes.
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Accepts a number, a numeric string, or null. Anything else becomes `None`
/// so that a malformed field renders as "N/A" instead of failing the whole row.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(serde_json::Value::String(s)) => parse_numeric(&s),
        _ => None,
    })
}

fn parse_numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts a string or a number and returns it as a string.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Visitor that turns integers, integral floats and numeric strings into a year.
pub(crate) struct YearVisitor;

impl YearVisitor {
    fn from_f64<E: de::Error>(v: f64) -> Result<i32, E> {
        if v.is_finite() && v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
            Ok(v as i32)
        } else {
            Err(E::custom(format!("fiscal_year must be a whole number, got {}", v)))
        }
    }
}

impl<'de> Visitor<'de> for YearVisitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric fiscal year")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::custom(format!("fiscal_year out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::custom(format!("fiscal_year out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        Self::from_f64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        let trimmed = v.trim();
        if let Ok(year) = trimmed.parse::<i32>() {
            return Ok(year);
        }
        match parse_numeric(trimmed) {
            Some(f) => Self::from_f64(f),
            None => Err(E::custom(format!(
                "fiscal_year must be numeric, got {:?}",
                v
            ))),
        }
    }
}
