//! Slug normalization for entity names.
//!
//! Node identity for oracle-supplied entities is derived from the entity
//! name, so the same concept surfaced by different expansions resolves to
//! the same node id and deduplicates through the store's idempotent merge.

/// Normalize an entity name into a stable slug.
///
/// Lowercases the input, keeps alphanumerics, collapses every run of other
/// characters into a single `_`, and trims leading/trailing separators.
///
/// # Example
///
/// ```
/// use cg_model::slugify;
///
/// assert_eq!(slugify("Ion-Channel  Regulation"), "ion_channel_regulation");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Bioelectric Signaling"), "bioelectric_signaling");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("gap -- junction (Cx43)"), "gap_junction_cx43");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  ion channel!  "), "ion_channel");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("HCN2 channel"), "hcn2_channel");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("--!!--"), "");
    }

    #[test]
    fn idempotent_on_existing_slugs() {
        let once = slugify("Planarian head-tail polarity");
        assert_eq!(slugify(&once), once);
    }
}
