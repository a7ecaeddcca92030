//! Validation verdicts
//!
//! Rejections are plain values the caller pattern-matches on. Two of them are
//! silent: the submission is ignored without telling the player anything.

use std::fmt;

/// Result of judging one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The submission is legal; carries the normalized word to record
    Accepted(String),
    /// The submission was turned down
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// True when the word may be recorded
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// True for rejections that should not be surfaced to the player
    #[inline]
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::Rejected(rejection) if rejection.is_silent())
    }

    /// Alert to show the player, if any
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => rejection.alert(),
        }
    }
}

/// Why a submission was turned down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than the minimum word length (silent)
    TooShort,
    /// Same as the root word (silent)
    SameAsRoot,
    /// Already accepted earlier this round
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotConstructible { root_word: String },
    /// The dictionary does not know the word
    NotARealWord,
}

impl Rejection {
    /// Silent rejections are treated as no-op submissions
    #[inline]
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::TooShort | Self::SameAsRoot)
    }

    /// Alert title, `None` for silent rejections
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::TooShort | Self::SameAsRoot => None,
            Self::AlreadyUsed => Some("Word used already"),
            Self::NotConstructible { .. } => Some("Word not possible"),
            Self::NotARealWord => Some("Word not recognized"),
        }
    }

    /// Alert body, `None` for silent rejections
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::TooShort | Self::SameAsRoot => None,
            Self::AlreadyUsed => Some("Be more original".to_string()),
            Self::NotConstructible { root_word } => {
                Some(format!("You can't spell that word from '{root_word}'!"))
            }
            Self::NotARealWord => Some("You can't just make them up, you know!".to_string()),
        }
    }

    /// Title and message together
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        Some(Alert {
            title: self.title()?.to_string(),
            message: self.message()?,
        })
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too short"),
            Self::SameAsRoot => write!(f, "same as the root word"),
            Self::AlreadyUsed => write!(f, "already used"),
            Self::NotConstructible { root_word } => {
                write!(f, "cannot be spelled from '{root_word}'")
            }
            Self::NotARealWord => write!(f, "not a real word"),
        }
    }
}

/// User-facing rejection notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_rejections_have_no_alert() {
        assert!(Rejection::TooShort.is_silent());
        assert!(Rejection::SameAsRoot.is_silent());
        assert_eq!(Rejection::TooShort.alert(), None);
        assert_eq!(Rejection::SameAsRoot.alert(), None);
    }

    #[test]
    fn already_used_alert() {
        let alert = Rejection::AlreadyUsed.alert().unwrap();
        assert_eq!(alert.title, "Word used already");
        assert_eq!(alert.message, "Be more original");
    }

    #[test]
    fn not_constructible_message_names_root() {
        let rejection = Rejection::NotConstructible {
            root_word: "silkworm".to_string(),
        };
        let alert = rejection.alert().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You can't spell that word from 'silkworm'!");
    }

    #[test]
    fn not_a_real_word_alert() {
        let alert = Rejection::NotARealWord.alert().unwrap();
        assert_eq!(alert.title, "Word not recognized");
        assert_eq!(alert.message, "You can't just make them up, you know!");
    }

    #[test]
    fn outcome_helpers() {
        let accepted = ValidationOutcome::Accepted("worm".to_string());
        assert!(accepted.is_accepted());
        assert!(!accepted.is_silent());
        assert_eq!(accepted.alert(), None);

        let silent = ValidationOutcome::Rejected(Rejection::TooShort);
        assert!(!silent.is_accepted());
        assert!(silent.is_silent());

        let loud = ValidationOutcome::Rejected(Rejection::AlreadyUsed);
        assert!(!loud.is_silent());
        assert!(loud.alert().is_some());
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::AlreadyUsed.to_string(), "already used");
        assert_eq!(
            Rejection::NotConstructible {
                root_word: "sleep".to_string()
            }
            .to_string(),
            "cannot be spelled from 'sleep'"
        );
    }
}
