//! Dictionary capability
//!
//! Defines the `RealWordChecker` trait the validator consults for the realness
//! check. Any backend (static list, spell checker, remote service) plugs in here.

/// Default dictionary locale
pub const DEFAULT_LOCALE: &str = "en";

/// A source of truth for whether a string is a real word
///
/// Implementations must answer deterministically for a fixed `(word, locale)`
/// pair within a session.
pub trait RealWordChecker {
    /// Check whether `word` is a real word in `locale`
    ///
    /// `word` is already normalized (lowercase, trimmed).
    fn is_real_word(&self, word: &str, locale: &str) -> bool;
}

impl<F> RealWordChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        self(word, locale)
    }
}

/// Compare two locale tags by their primary language subtag
///
/// `en`, `EN`, `en_US` and `en-GB` all match each other.
#[must_use]
pub fn same_language(a: &str, b: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }

    let (a, b) = (primary(a.trim()), primary(b.trim()));
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_checkers() {
        let checker = |word: &str, _locale: &str| word == "worm";
        assert!(checker.is_real_word("worm", DEFAULT_LOCALE));
        assert!(!checker.is_real_word("wors", DEFAULT_LOCALE));
    }

    #[test]
    fn checkers_work_as_trait_objects() {
        let checker = |word: &str, _locale: &str| word.len() > 3;
        let boxed: Box<dyn RealWordChecker> = Box::new(checker);

        assert!(boxed.is_real_word("silk", "en"));
        assert!(!boxed.is_real_word("ink", "en"));
    }

    #[test]
    fn same_language_compares_primary_subtag() {
        assert!(same_language("en", "en"));
        assert!(same_language("en", "EN"));
        assert!(same_language("en_US", "en"));
        assert!(same_language("en-GB", "en_US"));
        assert!(!same_language("en", "fr"));
        assert!(!same_language("", ""));
    }
}
