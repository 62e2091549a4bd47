use crate::error::FixtureError;
use crate::provider::FakeKind;
use crate::rule::{DerivedTime, Rule};
use crate::shape::Shape;
use crate::template::{Case, Template};
use crate::vocabulary::{
    CONTACT_SOURCES, CONTACT_STATUSES, CONTACT_TYPES, GENDERS, LANGUAGES, PRIORITIES, RANKS,
    SALUTATIONS, TAGS,
};

fn swiss_phone() -> Rule {
    Rule::Composed(Template::new().text("+41").int(100_000_000, 999_999_999))
}

/// `<prefix>{first}{last}{i}` with both names lower-cased.
fn profile_url(prefix: &'static str) -> Rule {
    Rule::Composed(
        Template::new()
            .text(prefix)
            .field_lower("first_name")
            .field_lower("last_name")
            .index(),
    )
}

/// # Errors
/// Errors with `InvalidShape` if the definition does not validate
#[allow(clippy::too_many_lines)]
pub fn contacts() -> Result<Shape, FixtureError> {
    Shape::new(
        "contacts",
        vec![
            (
                "email",
                Rule::Composed(
                    Template::new()
                        .field_lower("first_name")
                        .text(".")
                        .field_lower("last_name")
                        .text(".")
                        .index()
                        .text("@example.com"),
                ),
            ),
            ("first_name", Rule::Fake(FakeKind::FirstName)),
            ("last_name", Rule::Fake(FakeKind::LastName)),
            ("address_line1", Rule::Fake(FakeKind::StreetAddress)),
            (
                "address_line2",
                Rule::Composed(Template::new().text("Apt ").index_cycle(100, 1)),
            ),
            ("zip", Rule::Composed(Template::new().int(10_000, 99_999))),
            ("location", Rule::Fake(FakeKind::City)),
            ("canton", Rule::Fake(FakeKind::StateAbbr)),
            ("country", Rule::Constant("Switzerland")),
            ("language", Rule::Pick(LANGUAGES)),
            ("function", Rule::Fake(FakeKind::JobTitle)),
            ("phone", swiss_phone()),
            ("mobile_phone", swiss_phone()),
            ("salutation", Rule::Pick(SALUTATIONS)),
            ("gender", Rule::Pick(GENDERS)),
            (
                "website_url",
                Rule::Composed(
                    Template::new()
                        .text("https://")
                        .field_lower("first_name")
                        .field_lower("last_name")
                        .index()
                        .text(".com"),
                ),
            ),
            ("linkedin_url", profile_url("https://linkedin.com/in/")),
            ("facebook_url", profile_url("https://facebook.com/")),
            ("twitter_url", profile_url("https://twitter.com/")),
            (
                "birth_date",
                Rule::Fake(FakeKind::BirthDate {
                    min_age: 18,
                    max_age: 70,
                }),
            ),
            (
                "organization",
                Rule::Composed(Template::new().fake(FakeKind::CompanyName).text(" ").index()),
            ),
            (
                "department",
                Rule::Composed(
                    Template::new()
                        .fake_with(FakeKind::Bs, Case::Title)
                        .text(" ")
                        .index(),
                ),
            ),
            (
                "description",
                Rule::Composed(
                    Template::new()
                        .text("Test contact ")
                        .field("first_name")
                        .text(" ")
                        .field("last_name")
                        .text(" (")
                        .index()
                        .text(")"),
                ),
            ),
            (
                "contact_interests",
                Rule::Composed(Template::new().fake(FakeKind::Word).text("_").index()),
            ),
            ("priority", Rule::Pick(PRIORITIES)),
            ("status", Rule::Pick(CONTACT_STATUSES)),
            ("tag", Rule::IndexSuffixed(TAGS)),
            (
                "keywords",
                Rule::Composed(
                    Template::new()
                        .field("first_name")
                        .text(",")
                        .field("last_name")
                        .text(",test,")
                        .index(),
                ),
            ),
            ("last_access", Rule::DerivedTime(DerivedTime::new(2024, 7, 7, 12)?)),
            (
                "account_created_at",
                Rule::DerivedTime(DerivedTime::new(2023, 1, 1, 8)?),
            ),
            ("ranks", Rule::IndexSuffixed(RANKS)),
            ("contact_types", Rule::IndexSuffixed(CONTACT_TYPES)),
            ("sources", Rule::IndexSuffixed(CONTACT_SOURCES)),
            (
                "notes",
                Rule::Composed(Template::new().text("Generated for testing (").index().text(")")),
            ),
            (
                "industry",
                Rule::Composed(
                    Template::new()
                        .fake_with(FakeKind::Word, Case::Capitalize)
                        .text("_")
                        .index(),
                ),
            ),
        ],
    )
}
