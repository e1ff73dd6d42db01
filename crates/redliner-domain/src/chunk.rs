//! Chunk module - the unit of playbook text that gets indexed

use std::fmt;

/// A bounded, sentence-aligned segment of playbook text
///
/// Chunks are produced in source order; `sequence_index` is the position of the
/// chunk within the playbook it was cut from. Chunks are immutable once created
/// and live only for the duration of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The chunk text (sentences joined by single spaces)
    pub text: String,

    /// Zero-based position of this chunk in the source playbook
    pub sequence_index: usize,
}

impl Chunk {
    /// Create a new chunk
    ///
    /// # Examples
    ///
    /// ```
    /// use redliner_domain::Chunk;
    ///
    /// let chunk = Chunk::new("Vendors must sign NDAs.", 0);
    /// assert_eq!(chunk.token_count(), 4);
    /// ```
    pub fn new(text: impl Into<String>, sequence_index: usize) -> Self {
        Self {
            text: text.into(),
            sequence_index,
        }
    }

    /// Number of whitespace-delimited tokens in the chunk
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.sequence_index, self.text)
    }
}
