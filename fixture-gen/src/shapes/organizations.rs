use crate::error::FixtureError;
use crate::provider::FakeKind;
use crate::rule::Rule;
use crate::shape::Shape;
use crate::template::Template;
use crate::vocabulary::{
    CANTONS, COUNTRIES, FREQUENCIES, INDUSTRIES, LANGUAGES, LOCALES, MEDIA_TYPES,
    ORGANIZATION_SOURCES, ORGANIZATION_STATUSES, ORGANIZATION_TYPES,
};

fn swiss_phone() -> Rule {
    Rule::Composed(Template::new().text("+41").int(100_000_000, 999_999_999))
}

/// `<prefix>{username}{i}<suffix>`, with a fresh username on every row.
fn handle_url(prefix: &'static str, suffix: &'static str) -> Rule {
    Rule::Composed(
        Template::new()
            .text(prefix)
            .fake(FakeKind::Username)
            .index()
            .text(suffix),
    )
}

/// # Errors
/// Errors with `InvalidShape` if the definition does not validate
pub fn organizations() -> Result<Shape, FixtureError> {
    Shape::new(
        "organizations",
        vec![
            ("email", Rule::UniqueFake(FakeKind::Email)),
            ("name", Rule::Fake(FakeKind::CompanyName)),
            ("address_line1", Rule::Fake(FakeKind::StreetAddress)),
            ("contact_person", Rule::Fake(FakeKind::Name)),
            ("location", Rule::Fake(FakeKind::City)),
            ("frequency", Rule::Pick(FREQUENCIES)),
            ("media_type", Rule::Pick(MEDIA_TYPES)),
            ("zip", Rule::Composed(Template::new().int(1000, 9999))),
            ("country", Rule::Pick(COUNTRIES)),
            ("url", Rule::Fake(FakeKind::Url)),
            ("organization_type", Rule::Pick(ORGANIZATION_TYPES)),
            ("twitter_url", handle_url("https://twitter.com/", "")),
            ("facebook_url", handle_url("https://facebook.com/", "")),
            ("whatsapp_channel", swiss_phone()),
            (
                "linkedin_url",
                Rule::Composed(
                    Template::new()
                        .text("https://linkedin.com/company/")
                        .index()
                        .text("-")
                        .fake(FakeKind::CompanySuffix),
                ),
            ),
            ("telegram_url", handle_url("https://t.me/", "")),
            ("telegram_channel", handle_url("https://t.me/", "_channel")),
            ("instagram_url", handle_url("https://instagram.com/", "")),
            ("tiktok_url", handle_url("https://tiktok.com/@", "")),
            ("whatsapp_phone", swiss_phone()),
            ("phone", swiss_phone()),
            ("tag", Rule::Composed(Template::new().text("Tag_").index())),
            (
                "description",
                Rule::Composed(
                    Template::new()
                        .text("Organization ")
                        .field("name")
                        .text(" (")
                        .index()
                        .text(") in ")
                        .pick(INDUSTRIES),
                ),
            ),
            ("canton", Rule::Pick(CANTONS)),
            ("language", Rule::Pick(LANGUAGES)),
            ("locale", Rule::Pick(LOCALES)),
            ("status", Rule::Pick(ORGANIZATION_STATUSES)),
            ("sources", Rule::Pick(ORGANIZATION_SOURCES)),
            ("industry", Rule::Pick(INDUSTRIES)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organizations_header() {
        let shape = organizations().unwrap();
        assert_eq!(
            shape.header(),
            vec![
                "email",
                "name",
                "address_line1",
                "contact_person",
                "location",
                "frequency",
                "media_type",
                "zip",
                "country",
                "url",
                "organization_type",
                "twitter_url",
                "facebook_url",
                "whatsapp_channel",
                "linkedin_url",
                "telegram_url",
                "telegram_channel",
                "instagram_url",
                "tiktok_url",
                "whatsapp_phone",
                "phone",
                "tag",
                "description",
                "canton",
                "language",
                "locale",
                "status",
                "sources",
                "industry",
            ]
        );
    }

    #[test]
    fn test_only_email_is_unique() {
        let shape = organizations().unwrap();
        let unique: Vec<&str> = shape
            .fields()
            .iter()
            .filter(|field| matches!(field.rule, Rule::UniqueFake(_)))
            .map(|field| field.name)
            .collect();
        assert_eq!(unique, vec!["email"]);
    }
}
