//! Trait definitions for normalization components.

/// Text normalization trait.
///
/// Implementations convert raw input text into a speakable form, handling
/// numbers, currency, abbreviations, case, and whitespace. Normalization is
/// total: every input string produces an output string.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// # Arguments
    /// * `input` - Raw input text
    ///
    /// # Returns
    /// The normalized text.
    fn normalize(&self, input: &str) -> String;
}
