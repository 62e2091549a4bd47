use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use log::{debug, info, warn};
use rand::RngCore;

use crate::context::GenerationContext;
use crate::error::FixtureError;
use crate::provider::FakeSource;
use crate::shape::{PartialRow, Shape};

/// Rows between progress messages.
const PROGRESS_INTERVAL: u64 = 10_000;

/// One generated row, values in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, shape: &Shape, name: &str) -> Option<&str> {
        shape
            .position(name)
            .and_then(|position| self.values.get(position))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub path: PathBuf,
    pub count: u64,
    pub noun: &'static str,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done: '{}' generated with {} unique {}.",
            self.path.display(),
            self.count,
            self.noun
        )
    }
}

/// Builds the row at the context's current index and moves the context to the next one.
///
/// # Errors
/// Errors when a field rule fails, see [`crate::rule::Rule::evaluate`]
pub fn synthesize<R: RngCore, P: FakeSource>(
    shape: &Shape,
    ctx: &mut GenerationContext<R, P>,
) -> Result<Record, FixtureError> {
    let mut values: Vec<Option<String>> = vec![None; shape.len()];
    for &position in shape.evaluation_order() {
        let field = &shape.fields()[position];
        let value = field
            .rule
            .evaluate(field.name, &PartialRow::new(shape, &values), ctx)?;
        values[position] = Some(value);
    }
    ctx.advance();
    Ok(Record {
        values: values.into_iter().map(Option::unwrap_or_default).collect(),
    })
}

/// Writes the header and then `count` rows to `writer`, and flushes it.
///
/// Row indexes continue from the context's current index, which is 0 for a fresh context.
///
/// # Errors
/// Errors when a row cannot be generated or when writing to `writer` fails
pub fn generate<W: io::Write, R: RngCore, P: FakeSource>(
    shape: &Shape,
    count: u64,
    writer: &mut Writer<W>,
    ctx: &mut GenerationContext<R, P>,
) -> Result<u64, FixtureError> {
    writer.write_record(shape.header())?;
    for written in 1..=count {
        let record = synthesize(shape, ctx)?;
        writer.write_record(record.values())?;
        if written % PROGRESS_INTERVAL == 0 {
            debug!("{written}/{count} {} written", shape.noun());
        }
    }
    writer.flush()?;
    Ok(count)
}

/// Creates (or truncates) the file at `path` and fills it with `count` rows of `shape`.
///
/// A failed run leaves no file behind.
///
/// # Errors
/// Errors when the file cannot be created or written, or when a row cannot be generated
pub fn generate_file<R: RngCore, P: FakeSource>(
    shape: &Shape,
    count: u64,
    path: impl AsRef<Path>,
    ctx: &mut GenerationContext<R, P>,
) -> Result<GenerationSummary, FixtureError> {
    let path = path.as_ref();
    info!("Generating {count} {} into {}", shape.noun(), path.display());

    let mut writer = WriterBuilder::new().from_path(path)?;
    if let Err(e) = generate(shape, count, &mut writer, ctx) {
        drop(writer);
        warn!("Removing partial output {}: {e}", path.display());
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("Could not remove {}: {remove_err}", path.display());
        }
        return Err(e);
    }

    info!("Finished writing {count} {}", shape.noun());
    Ok(GenerationSummary {
        path: path.to_path_buf(),
        count,
        noun: shape.noun(),
    })
}
