use anyhow::Result;
use embedreq_config::OutputFormat;
use serde::Serialize;
use std::io::Write;

use crate::models::{EmbedResponse, ModelInfo};

#[derive(Serialize)]
struct JsonRecord<'a> {
    index: usize,
    document: &'a str,
    response: &'a EmbedResponse,
}

/// Write one document/result pair.
pub fn render_record<W: Write>(
    format: OutputFormat,
    index: usize,
    text: &str,
    response: &EmbedResponse,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "d:  {} \nembedding:  {}", text, response)?;
        }
        OutputFormat::Json => {
            let record = JsonRecord {
                index,
                document: text,
                response,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the server's model listing.
pub fn render_models<W: Write>(
    format: OutputFormat,
    models: &[ModelInfo],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for model in models {
                writeln!(out, "{}", model.name)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, models)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
