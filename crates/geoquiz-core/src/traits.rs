// crates/geoquiz-core/src/traits.rs
use crate::model::CityRecord;
use crate::text::{normalize, NormalizedKey};

/// Name-based matching for anything with a canonical name and aliases.
///
/// Matching is equality on the [`normalize`]d form, so case, diacritics,
/// periods, hyphens, apostrophes and spacing never matter. An empty key
/// matches nothing.
///
/// # Examples
/// ```rust
/// use geoquiz_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("São Paulo").is_named("sao-paulo"));
/// assert!(Place("Saint Louis").is_named("St. Louis"));
/// assert!(!Place("Paris").is_named(""));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Alternate names that match as well as the canonical one.
    fn alt_name_strs(&self) -> &[String] {
        &[]
    }

    /// True if the canonical name or any alternate normalizes to `key`.
    fn matches_key(&self, key: &NormalizedKey) -> bool {
        if key.is_empty() {
            return false;
        }
        normalize(self.name_str()) == *key
            || self.alt_name_strs().iter().any(|alt| normalize(alt) == *key)
    }

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.matches_key(&normalize(q))
    }
}

impl NameMatch for CityRecord {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alt_name_strs(&self) -> &[String] {
        &self.alt_names
    }
}
