//! Model-name normalization and casing variants.
//!
//! # Design
//!
//! [`ModelName`] is the single source of truth for one scaffolding run: the
//! user's input, trimmed, lower-cased, and singularized at entry. Every
//! casing/pluralization variant a stub needs is derived from it exactly once
//! into a [`NameVariants`] record and reused for the rest of the run.
//!
//! Derivation is a pure function: deriving again from the same name (or from
//! a re-parse of any variant of the same word) yields an identical record.
//!
//! Singular/plural conversion uses standard English rules via `Inflector`.
//! Irregular plurals ("person"/"people") are a known limitation of the
//! inflection rules; model names are typically regular words.

use inflector::Inflector;
use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

/// A normalized model name: trimmed, lower-case, singular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModelName(String);

impl ModelName {
    /// Parse and normalize raw user input.
    ///
    /// Accepts any casing and either grammatical number: "Category",
    /// "categories", and "category" all normalize to `category`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyModelName);
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(DomainError::InvalidModelName {
                name: trimmed.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        if trimmed.starts_with('.') {
            return Err(DomainError::InvalidModelName {
                name: trimmed.into(),
                reason: "name cannot start with '.'".into(),
            });
        }

        Ok(Self(trimmed.to_lowercase().to_singular()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only record of every naming variant the stub templates use.
///
/// Invariant: all fields are pure functions of the [`ModelName`] they were
/// derived from; recomputation is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    singular: String,
    plural: String,
    studly: String,
    studly_plural: String,
    kebab_plural: String,
}

impl NameVariants {
    /// Derive all variants from a normalized name.
    pub fn derive(name: &ModelName) -> Self {
        let singular = name.as_str().to_string();
        let plural = singular.to_plural();
        Self {
            studly: singular.to_pascal_case(),
            studly_plural: plural.to_pascal_case(),
            kebab_plural: plural.to_kebab_case(),
            singular,
            plural,
        }
    }

    /// Lower-case singular form: `post`.
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// Lower-case plural form: `posts`. Used by the migration reminder.
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Studly (PascalCase) singular form: `Post`. Class-name material.
    pub fn studly(&self) -> &str {
        &self.studly
    }

    /// Studly plural form: `Posts`. Request-namespace material.
    pub fn studly_plural(&self) -> &str {
        &self.studly_plural
    }

    /// Kebab-case plural form: `posts` / `user-profiles`. Route-path material.
    pub fn kebab_plural(&self) -> &str {
        &self.kebab_plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants_of(raw: &str) -> NameVariants {
        NameVariants::derive(&ModelName::parse(raw).unwrap())
    }

    #[test]
    fn post_derives_all_variants() {
        let v = variants_of("post");
        assert_eq!(v.singular(), "post");
        assert_eq!(v.studly(), "Post");
        assert_eq!(v.studly_plural(), "Posts");
        assert_eq!(v.kebab_plural(), "posts");
    }

    #[test]
    fn capitalized_plural_input_is_normalized_first() {
        // "categories" must reduce to "category" before variants are derived.
        let v = variants_of("Categories");
        assert_eq!(v.singular(), "category");
        assert_eq!(v.studly(), "Category");
        assert_eq!(v.studly_plural(), "Categories");
        assert_eq!(v.kebab_plural(), "categories");
    }

    #[test]
    fn multi_word_names_kebab_correctly() {
        let v = variants_of("user_profile");
        assert_eq!(v.studly(), "UserProfile");
        assert_eq!(v.studly_plural(), "UserProfiles");
        assert_eq!(v.kebab_plural(), "user-profiles");
    }

    #[test]
    fn derivation_is_idempotent_through_its_own_studly_output() {
        let first = variants_of("tag");
        let again = variants_of(first.studly());
        assert_eq!(first, again);
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(ModelName::parse("  post  ").unwrap().as_str(), "post");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ModelName::parse("   "), Err(DomainError::EmptyModelName));
    }

    #[test]
    fn path_separators_are_rejected() {
        assert!(ModelName::parse("a/b").is_err());
        assert!(ModelName::parse("a\\b").is_err());
    }

    #[test]
    fn dotfile_names_are_rejected() {
        assert!(matches!(
            ModelName::parse(".hidden"),
            Err(DomainError::InvalidModelName { .. })
        ));
    }
}
