use std::collections::HashMap;

use rand::{Rng, RngCore};

use crate::error::FixtureError;
use crate::provider::{FakeKind, FakeSource, Faker, UniquePool};
use crate::vocabulary::Vocabulary;

/// Everything a run needs to synthesize rows: the random source, the fake-data provider,
/// the running row index and the uniqueness pools of unique-constrained fields.
///
/// One context is built per run and handed to the generator explicitly.
#[derive(Debug)]
pub struct GenerationContext<R, P = Faker> {
    rng: R,
    provider: P,
    index: u64,
    unique_pools: HashMap<String, UniquePool>,
}

impl<R: RngCore, P: FakeSource> GenerationContext<R, P> {
    #[must_use]
    pub fn new(rng: R, provider: P) -> Self {
        GenerationContext {
            rng,
            provider,
            index: 0,
            unique_pools: HashMap::new(),
        }
    }

    /// Index of the row currently being synthesized.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    pub(crate) fn advance(&mut self) {
        self.index += 1;
    }

    pub fn fake(&mut self, kind: FakeKind) -> String {
        self.provider.produce(kind, &mut self.rng)
    }

    /// # Errors
    /// Errors with `GenerationExhausted` when the provider keeps returning values `field` already used
    pub fn unique_fake(&mut self, field: &str, kind: FakeKind) -> Result<String, FixtureError> {
        let provider = &self.provider;
        let rng = &mut self.rng;
        self.unique_pools
            .entry(field.to_string())
            .or_default()
            .draw(field, || provider.produce(kind, &mut *rng))
    }

    pub fn pick(&mut self, vocabulary: &Vocabulary) -> &'static str {
        vocabulary.pick(&mut self.rng)
    }

    pub fn int_between(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max.max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::LOCALES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_between_is_inclusive() {
        let mut ctx = GenerationContext::new(StdRng::seed_from_u64(5), Faker::default());
        for _ in 0..500 {
            let value = ctx.int_between(1000, 9999);
            assert!((1000..=9999).contains(&value));
        }
        assert_eq!(ctx.int_between(3, 3), 3);
    }

    #[test]
    fn test_unique_pools_are_per_field() {
        let mut ctx = GenerationContext::new(StdRng::seed_from_u64(9), Faker::default());
        let a = ctx.unique_fake("email", FakeKind::Email).unwrap();
        let b = ctx.unique_fake("email", FakeKind::Email).unwrap();
        assert_ne!(a, b);
        assert!(ctx.unique_fake("backup_email", FakeKind::Email).is_ok());
    }

    #[test]
    fn test_index_advances() {
        let mut ctx = GenerationContext::new(StdRng::seed_from_u64(0), Faker::default());
        assert_eq!(ctx.index(), 0);
        ctx.advance();
        ctx.advance();
        assert_eq!(ctx.index(), 2);
        assert!(LOCALES.contains(ctx.pick(&LOCALES)));
    }
}
