//! String templates for composed fields.
//!
//! A template is a list of segments rendered left to right against the row being built.
//! Field segments read values already generated for the same row, so the shape makes sure
//! those fields are evaluated first.

use rand::RngCore;

use crate::context::GenerationContext;
use crate::error::FixtureError;
use crate::provider::{FakeKind, FakeSource};
use crate::shape::PartialRow;
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    AsIs,
    Lower,
    /// Upper-cases the first letter of every word and lower-cases the rest.
    Title,
    /// Upper-cases the first character and lower-cases the rest.
    Capitalize,
}

impl Case {
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Case::AsIs => value.to_string(),
            Case::Lower => value.to_lowercase(),
            Case::Title => {
                let mut out = String::with_capacity(value.len());
                let mut in_word = false;
                for c in value.chars() {
                    if c.is_alphabetic() {
                        if in_word {
                            out.extend(c.to_lowercase());
                        } else {
                            out.extend(c.to_uppercase());
                        }
                        in_word = true;
                    } else {
                        out.push(c);
                        in_word = false;
                    }
                }
                out
            }
            Case::Capitalize => {
                let mut chars = value.chars();
                chars.next().map_or_else(String::new, |first| {
                    first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect()
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(&'static str),
    Field { name: &'static str, case: Case },
    Index,
    /// `(index % modulus) + offset`
    IndexCycle { modulus: u64, offset: u64 },
    Fake { kind: FakeKind, case: Case },
    Pick(Vocabulary),
    Int { min: u64, max: u64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    #[must_use]
    pub fn new() -> Self {
        Template::default()
    }

    #[must_use]
    pub fn text(self, text: &'static str) -> Self {
        self.push(Segment::Text(text))
    }

    #[must_use]
    pub fn field(self, name: &'static str) -> Self {
        self.field_with(name, Case::AsIs)
    }

    #[must_use]
    pub fn field_lower(self, name: &'static str) -> Self {
        self.field_with(name, Case::Lower)
    }

    #[must_use]
    pub fn field_with(self, name: &'static str, case: Case) -> Self {
        self.push(Segment::Field { name, case })
    }

    #[must_use]
    pub fn index(self) -> Self {
        self.push(Segment::Index)
    }

    #[must_use]
    pub fn index_cycle(self, modulus: u64, offset: u64) -> Self {
        self.push(Segment::IndexCycle { modulus, offset })
    }

    #[must_use]
    pub fn fake(self, kind: FakeKind) -> Self {
        self.fake_with(kind, Case::AsIs)
    }

    #[must_use]
    pub fn fake_with(self, kind: FakeKind, case: Case) -> Self {
        self.push(Segment::Fake { kind, case })
    }

    #[must_use]
    pub fn pick(self, vocabulary: Vocabulary) -> Self {
        self.push(Segment::Pick(vocabulary))
    }

    #[must_use]
    pub fn int(self, min: u64, max: u64) -> Self {
        self.push(Segment::Int { min, max })
    }

    fn push(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Names of the fields this template reads from the row.
    pub fn references(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { name, .. } => Some(*name),
            _ => None,
        })
    }

    /// # Errors
    /// Errors with `InvalidShape` when a referenced field has no value yet in `row`
    pub fn render<R: RngCore, P: FakeSource>(
        &self,
        row: &PartialRow<'_>,
        ctx: &mut GenerationContext<R, P>,
    ) -> Result<String, FixtureError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field { name, case } => {
                    let value = row.get(name).ok_or_else(|| {
                        FixtureError::InvalidShape(format!(
                            "`{name}` is referenced before it is generated"
                        ))
                    })?;
                    out.push_str(&case.apply(value));
                }
                Segment::Index => out.push_str(&ctx.index().to_string()),
                Segment::IndexCycle { modulus, offset } => {
                    let cycled = ctx.index() % (*modulus).max(1) + offset;
                    out.push_str(&cycled.to_string());
                }
                Segment::Fake { kind, case } => out.push_str(&case.apply(&ctx.fake(*kind))),
                Segment::Pick(vocabulary) => out.push_str(ctx.pick(vocabulary)),
                Segment::Int { min, max } => {
                    out.push_str(&ctx.int_between(*min, *max).to_string());
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Faker;
    use crate::rule::Rule;
    use crate::shape::Shape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn name_shape() -> Shape {
        Shape::new(
            "people",
            vec![
                ("first_name", Rule::Constant("Anna")),
                ("last_name", Rule::Constant("Meier-Keller")),
            ],
        )
        .unwrap()
    }

    fn context_at(index: u64) -> GenerationContext<StdRng> {
        let mut ctx = GenerationContext::new(StdRng::seed_from_u64(1), Faker::default());
        for _ in 0..index {
            ctx.advance();
        }
        ctx
    }

    #[test]
    fn test_case_apply() {
        assert_eq!(Case::Lower.apply("Anna"), "anna");
        assert_eq!(Case::Title.apply("empower VIRTUAL e-markets"), "Empower Virtual E-Markets");
        assert_eq!(Case::Capitalize.apply("hELLO world"), "Hello world");
        assert_eq!(Case::Capitalize.apply(""), "");
        assert_eq!(Case::AsIs.apply("MiXed"), "MiXed");
    }

    #[test]
    fn test_render_fields_and_index() {
        let shape = name_shape();
        let values = vec![Some("Anna".to_string()), Some("Meier-Keller".to_string())];
        let row = PartialRow::new(&shape, &values);
        let template = Template::new()
            .field_lower("first_name")
            .text(".")
            .field_lower("last_name")
            .text(".")
            .index()
            .text("@example.com");
        let mut ctx = context_at(17);
        assert_eq!(
            template.render(&row, &mut ctx).unwrap(),
            "anna.meier-keller.17@example.com"
        );
        assert_eq!(template.references().collect::<Vec<_>>(), vec!["first_name", "last_name"]);
    }

    #[test]
    fn test_render_index_cycle() {
        let shape = name_shape();
        let values = vec![None, None];
        let row = PartialRow::new(&shape, &values);
        let template = Template::new().text("Apt ").index_cycle(100, 1);
        assert_eq!(template.render(&row, &mut context_at(0)).unwrap(), "Apt 1");
        assert_eq!(template.render(&row, &mut context_at(99)).unwrap(), "Apt 100");
        assert_eq!(template.render(&row, &mut context_at(100)).unwrap(), "Apt 1");
    }

    #[test]
    fn test_render_random_int() {
        let shape = name_shape();
        let values = vec![None, None];
        let row = PartialRow::new(&shape, &values);
        let template = Template::new().text("+41").int(100_000_000, 999_999_999);
        let mut ctx = context_at(0);
        for _ in 0..100 {
            let phone = template.render(&row, &mut ctx).unwrap();
            assert_eq!(phone.len(), 12);
            assert!(phone[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_render_missing_field() {
        let shape = name_shape();
        let values = vec![None, None];
        let row = PartialRow::new(&shape, &values);
        let template = Template::new().field("first_name");
        assert!(matches!(
            template.render(&row, &mut context_at(0)),
            Err(FixtureError::InvalidShape(_))
        ));
    }
}
