//! Human-readable report of an asset search response.
//!
//! Output layout:
//!
//! ```text
//! Status: 200
//!
//! Response keys: ["data", "metadata"]
//!
//! Pagination metadata:
//! { ... }
//! Page number: 0
//! ...
//! ```

use std::io::Write;

use serde_json::Value;

use ap_protocol::{Envelope, PageMetadata, ResponseShape, ValueShape, display_optional, json_kind};

use crate::error::{ProbeError, ProbeResult};

/// Write the report for one response to `out`.
///
/// The status line is always written first. A success body that is JSON
/// but not an object fails with [`ProbeError::UnexpectedShape`] after it,
/// as does a `metadata` value that is not an object once it is printed.
pub fn write_report<W: Write>(out: &mut W, status: u16, body: &str) -> ProbeResult<()> {
    writeln!(out, "Status: {status}")?;

    match ResponseShape::classify(status, body) {
        ResponseShape::NotJson(text) => {
            writeln!(out, "\nResponse text (not JSON):")?;
            writeln!(out, "{text}")?;
        }
        ResponseShape::ErrorPayload(payload) => {
            writeln!(out, "\nError response:")?;
            writeln!(out, "{}", pretty(&payload)?)?;
        }
        ResponseShape::Envelope(envelope) => write_envelope(out, &envelope)?,
        ResponseShape::NonObject(value) => {
            return Err(ProbeError::UnexpectedShape(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
    }

    Ok(())
}

/// Render the report into a string.
pub fn render(status: u16, body: &str) -> ProbeResult<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, status, body)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_envelope<W: Write>(out: &mut W, envelope: &Envelope) -> ProbeResult<()> {
    writeln!(out, "\nResponse keys: {:?}", envelope.keys())?;

    match envelope.raw_metadata() {
        Some(raw) => {
            writeln!(out, "\nPagination metadata:")?;
            writeln!(out, "{}", pretty(raw)?)?;
            let meta = PageMetadata::from_value(raw).ok_or_else(|| {
                ProbeError::UnexpectedShape(format!("metadata is {}", json_kind(raw)))
            })?;
            writeln!(out, "Page number: {}", display_optional(meta.number.as_ref()))?;
            writeln!(out, "Total pages: {}", display_optional(meta.total_pages.as_ref()))?;
            writeln!(
                out,
                "Total assets: {}",
                display_optional(meta.total_resources.as_ref())
            )?;
            writeln!(out, "Page size: {}", display_optional(meta.size.as_ref()))?;
        }
        None => {
            writeln!(out, "\nNo 'metadata' key found in response")?;
            writeln!(out, "Full response structure (first level):")?;
            for (key, value) in envelope.fields() {
                writeln!(out, "  {key}: {}", ValueShape::of(value))?;
            }
        }
    }

    if let (Some(assets), Some(first)) = (envelope.data(), envelope.first_asset()) {
        writeln!(out, "\nTotal assets in response: {}", assets.len())?;
        writeln!(out, "\nFirst asset sample:")?;
        writeln!(out, "{}", pretty(first)?)?;
    }

    Ok(())
}

/// Pretty-print with two-space indentation.
fn pretty(value: &Value) -> ProbeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
