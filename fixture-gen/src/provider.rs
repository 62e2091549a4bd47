use std::collections::HashSet;

use chrono::{Duration, Local, Months, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName};
use fake::faker::company::en::{Bs, CompanyName, CompanySuffix};
use fake::faker::internet::en::{DomainSuffix, FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::{Rng, RngCore};

use crate::error::FixtureError;

/// Number of draws a unique field gets before the run gives up on it.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeKind {
    FirstName,
    LastName,
    Name,
    StreetAddress,
    City,
    StateAbbr,
    JobTitle,
    CompanyName,
    CompanySuffix,
    Bs,
    Word,
    Url,
    Username,
    Email,
    BirthDate { min_age: u32, max_age: u32 },
}

pub trait FakeSource {
    fn produce(&self, kind: FakeKind, rng: &mut dyn RngCore) -> String;
}

/// Fake values from the `fake` crate's english locale.
#[derive(Debug, Clone, Copy)]
pub struct Faker {
    today: NaiveDate,
}

impl Faker {
    /// `today` anchors the age ranges of generated birth dates.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Faker { today }
    }

}

impl Default for Faker {
    fn default() -> Self {
        Faker::new(Local::now().date_naive())
    }
}

impl FakeSource for Faker {
    fn produce(&self, kind: FakeKind, rng: &mut dyn RngCore) -> String {
        match kind {
            FakeKind::FirstName => FirstName().fake_with_rng(rng),
            FakeKind::LastName => LastName().fake_with_rng(rng),
            FakeKind::Name => Name().fake_with_rng(rng),
            FakeKind::StreetAddress => {
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                format!("{number} {street}")
            }
            FakeKind::City => CityName().fake_with_rng(rng),
            FakeKind::StateAbbr => StateAbbr().fake_with_rng(rng),
            FakeKind::JobTitle => Title().fake_with_rng(rng),
            FakeKind::CompanyName => CompanyName().fake_with_rng(rng),
            FakeKind::CompanySuffix => CompanySuffix().fake_with_rng(rng),
            FakeKind::Bs => Bs().fake_with_rng(rng),
            FakeKind::Word => Word().fake_with_rng(rng),
            FakeKind::Url => {
                let host: String = Word().fake_with_rng(rng);
                let suffix: String = DomainSuffix().fake_with_rng(rng);
                format!("https://www.{}.{suffix}/", host.to_lowercase())
            }
            FakeKind::Username => Username().fake_with_rng(rng),
            FakeKind::Email => FreeEmail().fake_with_rng(rng),
            FakeKind::BirthDate { min_age, max_age } => {
                birth_date(self.today, min_age, max_age, rng)
                    .format(BIRTH_DATE_FORMAT)
                    .to_string()
            }
        }
    }
}

/// Draws a date of birth for someone aged between `min_age` and `max_age` (inclusive) on `today`.
pub fn birth_date<R: Rng + ?Sized>(
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
    rng: &mut R,
) -> NaiveDate {
    let latest = today
        .checked_sub_months(Months::new(min_age.saturating_mul(12)))
        .unwrap_or(today);
    let earliest = today
        .checked_sub_months(Months::new(max_age.saturating_add(1).saturating_mul(12)))
        .and_then(|date| date.succ_opt())
        .unwrap_or(latest);
    let span = (latest - earliest).num_days().max(0);
    earliest
        .checked_add_signed(Duration::days(rng.gen_range(0..=span)))
        .unwrap_or(latest)
}

/// Values already handed out for one unique-constrained field.
#[derive(Debug, Default)]
pub struct UniquePool {
    seen: HashSet<String>,
}

impl UniquePool {
    /// # Errors
    /// Errors with `GenerationExhausted` when `MAX_UNIQUE_ATTEMPTS` draws in a row were all repeats
    pub fn draw(
        &mut self,
        field: &str,
        mut next: impl FnMut() -> String,
    ) -> Result<String, FixtureError> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let value = next();
            if !self.seen.contains(&value) {
                self.seen.insert(value.clone());
                return Ok(value);
            }
        }
        Err(FixtureError::GenerationExhausted {
            field: field.to_string(),
            attempts: MAX_UNIQUE_ATTEMPTS,
        })
    }
}
