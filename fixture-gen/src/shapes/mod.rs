//! The two record types the generator ships with.

mod contacts;
mod organizations;

use std::fmt;

pub use contacts::contacts;
pub use organizations::organizations;

use crate::error::FixtureError;
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Contacts,
    Organizations,
}

impl ShapeKind {
    /// # Errors
    /// Errors with `InvalidShape` if the built-in definition does not validate
    pub fn shape(self) -> Result<Shape, FixtureError> {
        match self {
            ShapeKind::Contacts => contacts(),
            ShapeKind::Organizations => organizations(),
        }
    }

    /// Name of the command-line tool generating this shape.
    #[must_use]
    pub fn tool_name(self) -> &'static str {
        match self {
            ShapeKind::Contacts => "generate_contacts",
            ShapeKind::Organizations => "generate_organizations",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Contacts => write!(f, "contacts"),
            ShapeKind::Organizations => write!(f, "organizations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_names() {
        for kind in [ShapeKind::Contacts, ShapeKind::Organizations] {
            assert_eq!(kind.shape().unwrap().noun(), kind.to_string());
            assert_eq!(kind.tool_name(), format!("generate_{kind}"));
        }
    }
}
