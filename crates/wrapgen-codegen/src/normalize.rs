//! Free-text type normalization
//!
//! Documentation writes types loosely (`VarInt`, `Unsigned Byte`,
//! `Array of Position`). The normalizer folds that text into the output
//! type tokens the emitter declares, using an ordered list of literal
//! substitutions and a small array heuristic.

use wrapgen_core::{GeneratorConfig, default_type_substitutions};

const ARRAY_MARKER: &str = "array";

/// Converts documentation type text into output type tokens.
///
/// Normalization is a pure function of the input text and the values the
/// normalizer was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNormalizer {
    substitutions: Vec<(String, String)>,
    stopwords: Vec<String>,
}

impl Default for TypeNormalizer {
    fn default() -> Self {
        Self::new(
            default_type_substitutions(),
            vec!["array".to_string(), "of".to_string()],
        )
    }
}

impl TypeNormalizer {
    pub fn new(substitutions: Vec<(String, String)>, stopwords: Vec<String>) -> Self {
        Self {
            substitutions,
            stopwords,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.type_substitutions.clone(),
            config.array_stopwords.clone(),
        )
    }

    /// Output type token for documentation type text.
    ///
    /// The text is lower-cased, run through the substitutions in order and
    /// stripped of whitespace. If the result mentions an array, the element
    /// type is guessed as the longest word that is not a stopword.
    pub fn normalize(&self, raw: &str) -> String {
        let substituted = self
            .substitutions
            .iter()
            .fold(raw.to_lowercase(), |text, (from, to)| {
                text.replace(from.as_str(), to)
            });

        let compact: String = substituted.split_whitespace().collect();
        if !compact.contains(ARRAY_MARKER) {
            return compact;
        }

        let element = self
            .element_word(&substituted)
            .replace(ARRAY_MARKER, "")
            .replace("of", "");

        format!("{element}[]")
    }

    /// Longest non-stopword token; the first one wins ties
    fn element_word<'t>(&self, text: &'t str) -> &'t str {
        text.split_whitespace()
            .filter(|word| !self.stopwords.iter().any(|stop| stop == word))
            .fold("", |best, word| {
                if word.len() > best.len() { word } else { best }
            })
    }
}
