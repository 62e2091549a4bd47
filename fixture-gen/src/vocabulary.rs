use rand::seq::SliceRandom;
use rand::Rng;

/// A fixed set of category values that rows draw from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    values: &'static [&'static str],
}

impl Vocabulary {
    /// # Panics
    /// When `values` is empty. Vocabularies are compile-time constants, so this is a definition error.
    #[must_use]
    pub const fn new(values: &'static [&'static str]) -> Self {
        assert!(!values.is_empty(), "vocabulary must not be empty");
        Vocabulary { values }
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        // `new` rejects empty vocabularies
        self.values.choose(rng).copied().unwrap_or_default()
    }
}

pub const PRIORITIES: Vocabulary = Vocabulary::new(&["p1", "p2", "p3", "p4", "p5"]);
pub const SALUTATIONS: Vocabulary = Vocabulary::new(&["Mr.", "Ms.", "Mrs.", "Dr."]);
pub const GENDERS: Vocabulary = Vocabulary::new(&["Male", "Female", "Other"]);
pub const LANGUAGES: Vocabulary = Vocabulary::new(&["English", "German", "French", "Italian"]);
pub const CONTACT_STATUSES: Vocabulary = Vocabulary::new(&[
    "new",
    "closed",
    "contacted",
    "negotiating",
    "registered",
    "backfill",
    "customer/no marketing",
    "prospect/marketing",
]);
pub const TAGS: Vocabulary = Vocabulary::new(&["Lead", "Customer", "Prospect"]);
pub const RANKS: Vocabulary = Vocabulary::new(&["Gold", "Silver", "Bronze"]);
pub const CONTACT_TYPES: Vocabulary = Vocabulary::new(&["Primary Contact", "Secondary Contact"]);
pub const CONTACT_SOURCES: Vocabulary = Vocabulary::new(&["Website Form", "Referral", "Event"]);

pub const FREQUENCIES: Vocabulary = Vocabulary::new(&["Daily", "Weekly", "Monthly", "Yearly"]);
pub const MEDIA_TYPES: Vocabulary = Vocabulary::new(&["Online", "Print", "TV", "Radio"]);
pub const ORGANIZATION_TYPES: Vocabulary =
    Vocabulary::new(&["Non-profit", "Company", "Government", "Startup"]);
pub const COUNTRIES: Vocabulary = Vocabulary::new(&["Switzerland", "Germany", "France", "Italy"]);
pub const CANTONS: Vocabulary = Vocabulary::new(&["ZH", "GE", "VD", "BE", "TI"]);
pub const LOCALES: Vocabulary = Vocabulary::new(&["en_CH", "de_CH", "fr_CH", "it_CH"]);
pub const ORGANIZATION_STATUSES: Vocabulary = Vocabulary::new(&["new", "existed"]);
pub const ORGANIZATION_SOURCES: Vocabulary =
    Vocabulary::new(&["Website", "Referral", "Event", "Social Media"]);
pub const INDUSTRIES: Vocabulary =
    Vocabulary::new(&["Finance", "Healthcare", "Education", "Technology", "Retail"]);
