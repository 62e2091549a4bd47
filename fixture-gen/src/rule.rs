use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::RngCore;

use crate::context::GenerationContext;
use crate::error::FixtureError;
use crate::provider::{FakeKind, FakeSource};
use crate::shape::PartialRow;
use crate::template::Template;
use crate::vocabulary::Vocabulary;

pub const DERIVED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How the value of one field is produced for each row.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Constant(&'static str),
    Fake(FakeKind),
    Pick(Vocabulary),
    Composed(Template),
    /// A pick followed by `_<index>`, which makes every row's value distinct.
    IndexSuffixed(Vocabulary),
    DerivedTime(DerivedTime),
    /// A fake value that is never repeated within a run.
    UniqueFake(FakeKind),
}

/// A fixed date and hour whose minute and second are taken from the row index.
///
/// Minute is `(index / 60) % 60` and second is `index % 60`, so the value wraps back to the
/// start of the hour every 3600 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTime {
    base: NaiveDateTime,
}

impl DerivedTime {
    /// # Errors
    /// Errors with `InvalidShape` when the date or hour does not exist
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, FixtureError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(|base| DerivedTime { base })
            .ok_or_else(|| {
                FixtureError::InvalidShape(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}h is not a valid time"
                ))
            })
    }

    #[must_use]
    pub fn at(&self, index: u64) -> NaiveDateTime {
        let minutes = (index / 60) % 60;
        let seconds = index % 60;
        // both offsets are below 60, the sum stays inside the base hour
        self.base
            + Duration::minutes(i64::try_from(minutes).unwrap_or_default())
            + Duration::seconds(i64::try_from(seconds).unwrap_or_default())
    }

    #[must_use]
    pub fn render(&self, index: u64) -> String {
        self.at(index).format(DERIVED_TIME_FORMAT).to_string()
    }
}

impl Rule {
    /// Fields this rule reads from the row being built.
    #[must_use]
    pub fn references(&self) -> Vec<&'static str> {
        match self {
            Rule::Composed(template) => template.references().collect(),
            _ => Vec::new(),
        }
    }

    /// # Errors
    /// Errors with `GenerationExhausted` when a unique field runs out of fresh values, or with
    /// `InvalidShape` when a composed field reads a field that has not been generated yet
    pub fn evaluate<R: RngCore, P: FakeSource>(
        &self,
        field: &str,
        row: &PartialRow<'_>,
        ctx: &mut GenerationContext<R, P>,
    ) -> Result<String, FixtureError> {
        match self {
            Rule::Constant(value) => Ok((*value).to_string()),
            Rule::Fake(kind) => Ok(ctx.fake(*kind)),
            Rule::Pick(vocabulary) => Ok(ctx.pick(vocabulary).to_string()),
            Rule::Composed(template) => template.render(row, ctx),
            Rule::IndexSuffixed(vocabulary) => {
                let value = ctx.pick(vocabulary);
                let index = ctx.index();
                Ok(format!("{value}_{index}"))
            }
            Rule::DerivedTime(time) => Ok(time.render(ctx.index())),
            Rule::UniqueFake(kind) => ctx.unique_fake(field, *kind),
        }
    }
}
