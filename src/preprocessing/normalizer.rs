use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::preprocessing::tokenizer;
use crate::stemer::porter_algorithm::porter_stem;

/// Raised when the tokenize/stem pipeline panics on some input. Callers are
/// expected to treat this as "no usable tokens" and fall back to the empty
/// set rather than failing the request.
#[derive(Debug)]
pub struct NormalizationError {
    detail: String,
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text normalization failed: {}", self.detail)
    }
}

impl Error for NormalizationError {}

/// Turns raw text into a canonical token set: lowercase, tokenize, drop stop
/// words, stem. The stop word set is fixed at construction time.
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(stop_words: HashSet<String>) -> Self {
        Normalizer { stop_words }
    }

    pub fn normalize(&self, text: &str) -> Result<HashSet<String>, NormalizationError> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut tokens = HashSet::new();
            for token in tokenizer::tokenize(text) {
                if self.stop_words.contains(&token) {
                    continue;
                }
                tokens.insert(porter_stem(&token));
            }
            tokens
        }));

        result.map_err(|_| NormalizationError {
            detail: format!("panic while processing {} bytes of input", text.len()),
        })
    }
}
