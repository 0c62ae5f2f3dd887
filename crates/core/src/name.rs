use serde::{Deserialize, Serialize};

/// Normalized ingredient name, the identity key of the store.
///
/// Construction goes through [`IngredientName::new`], which title-cases the
/// raw input, so two spellings of the same ingredient ("flour", "FLOUR")
/// always resolve to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientName(String);

impl IngredientName {
    /// Normalize `raw` into title form: the first letter of each alphabetic
    /// run is uppercased, the rest lowercased ("whole milk" -> "Whole Milk").
    pub fn new(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        let mut at_word_start = true;
        for ch in raw.trim().chars() {
            if ch.is_alphabetic() {
                if at_word_start {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
                at_word_start = false;
            } else {
                out.push(ch);
                at_word_start = true;
            }
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for IngredientName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
