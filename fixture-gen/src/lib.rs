#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Synthetic CSV fixtures for seeding and load-testing the CRM.
//!
//! A [`shape::Shape`] lists the columns of a record type together with the [`rule::Rule`]
//! producing each value. The [`generator`] interprets a shape row by row against a
//! [`context::GenerationContext`] and streams the rows to a CSV writer.

pub mod context;
pub mod error;
pub mod generator;
pub mod provider;
pub mod rule;
pub mod shape;
pub mod shapes;
pub mod template;
pub mod vocabulary;

pub use context::GenerationContext;
pub use error::FixtureError;
pub use generator::{generate, generate_file, synthesize, GenerationSummary, Record};
pub use provider::{FakeKind, FakeSource, Faker};
pub use shape::Shape;
pub use shapes::ShapeKind;
