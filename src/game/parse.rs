//! Strict JSON entry points for the game chart document.
//!
//! Parsing reports the JSON path of the first failing field. A tier absent
//! from the document deserializes to the empty collection; downstream
//! conversion treats that as "no content", never as an error.

use thiserror::Error;

use super::Chart;

/// Error from [`parse_chart`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartParseError {
    /// The document did not match the chart shape.
    #[error("malformed chart document: {0}")]
    Malformed(#[from] serde_path_to_error::Error<serde_json::Error>),
}

/// Error from [`chart_to_json`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartWriteError {
    /// A chart value could not be represented in JSON.
    #[error("chart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parses a game chart document from JSON source text.
///
/// # Errors
///
/// Returns [`ChartParseError`] naming the JSON path of the first mismatch.
pub fn parse_chart(source: &str) -> Result<Chart, ChartParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}

/// Serializes a game chart document to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ChartWriteError`] when a value cannot be represented.
pub fn chart_to_json(chart: &Chart) -> Result<String, ChartWriteError> {
    Ok(serde_json::to_string_pretty(chart)?)
}
