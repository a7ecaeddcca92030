//! Submission validation
//!
//! The legality pipeline and the dictionary capability it depends on.

mod checker;
mod dictionary;
mod pipeline;

pub use checker::{DEFAULT_LOCALE, RealWordChecker, same_language};
pub use dictionary::{Dictionary, DictionaryError};
pub use pipeline::{WordValidator, validate};
