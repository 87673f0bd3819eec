//! Declarative field constraints shared by flow inputs and decoded model outputs.
//!
//! Shape and types come from serde; this layer holds the constraints serde
//! cannot express (minimum lengths, numeric ranges). Each violation carries
//! the wire-level field path so callers see exactly which fields failed.

use std::fmt;

/// A single violated constraint, addressed by its wire-level field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violated field from one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Types that declare constraints on top of their serde-derived shape.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Collects violations across all declared constraints before failing,
/// so a caller fixing input sees every problem at once.
#[derive(Debug, Default)]
pub struct Checks {
    violations: Vec<Violation>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_len(&mut self, path: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.violations.push(Violation {
                path: path.to_string(),
                message: format!("must be at least {min} characters"),
            });
        }
        self
    }

    pub fn range(&mut self, path: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.violations.push(Violation {
                path: path.to_string(),
                message: format!("must be between {min} and {max}"),
            });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}
