//! Sentence-aligned chunking of playbook text

use crate::error::AnalyzerError;
use crate::segmenter::PunctuationSegmenter;
use redliner_domain::traits::SentenceSegmenter;
use redliner_domain::Chunk;

/// Default token budget per chunk
pub const DEFAULT_MAX_TOKENS: usize = 500;

/// Packs consecutive sentences into chunks under a token budget
///
/// Tokens are whitespace-delimited words. A sentence is never split: one that
/// exceeds the budget on its own becomes a single oversized chunk.
pub struct SentenceChunker<S = PunctuationSegmenter> {
    segmenter: S,
    max_tokens: usize,
}

impl SentenceChunker {
    /// Create a chunker using the default punctuation segmenter
    pub fn with_max_tokens(max_tokens: usize) -> Self {
        Self::new(PunctuationSegmenter::new(), max_tokens)
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::with_max_tokens(DEFAULT_MAX_TOKENS)
    }
}

impl<S: SentenceSegmenter> SentenceChunker<S> {
    /// Create a new chunker
    pub fn new(segmenter: S, max_tokens: usize) -> Self {
        Self {
            segmenter,
            max_tokens,
        }
    }

    /// Token budget per chunk
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Split text into chunks, in source order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `text` is empty or whitespace only.
    pub fn split(&self, text: &str) -> Result<Vec<Chunk>, AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::InvalidInput(
                "Cannot chunk empty text".to_string(),
            ));
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_tokens = 0;

        let sentences = self.segmenter.segment(text);
        for sentence in sentences.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            let sentence_tokens = sentence.split_whitespace().count();

            if current.is_empty() || current_tokens + sentence_tokens <= self.max_tokens {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(sentence);
                current_tokens += sentence_tokens;
            } else {
                chunks.push(Chunk::new(std::mem::take(&mut current), chunks.len()));
                current.push_str(sentence);
                current_tokens = sentence_tokens;
            }
        }

        if !current.is_empty() {
            chunks.push(Chunk::new(current, chunks.len()));
        }

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Treats each line as a sentence
    struct LineSegmenter;

    impl SentenceSegmenter for LineSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            text.lines().map(str::to_string).collect()
        }
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let chunker = SentenceChunker::with_max_tokens(DEFAULT_MAX_TOKENS);
        let chunks = chunker.split("Vendors must sign NDAs. Payment is net 30.").unwrap();
        assert_eq!(chunks, vec![Chunk::new("Vendors must sign NDAs. Payment is net 30.", 0)]);
    }

    #[test]
    fn test_splits_at_token_budget() {
        let chunker = SentenceChunker::with_max_tokens(4);
        let chunks = chunker.split("One two three. Four five. Six seven eight nine.").unwrap();

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["One two three.", "Four five.", "Six seven eight nine."]);
        let indices: Vec<usize> = chunks.iter().map(|c| c.sequence_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_budget_is_inclusive() {
        let chunker = SentenceChunker::with_max_tokens(4);
        let chunks = chunker.split("One two. Three four.").unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].token_count(), 4);
    }

    #[test]
    fn test_oversized_sentence_kept_whole() {
        let chunker = SentenceChunker::with_max_tokens(2);
        let chunks = chunker.split("Short. This sentence is far too long. End.").unwrap();

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Short.", "This sentence is far too long.", "End."]);
    }

    #[test]
    fn test_oversized_first_sentence() {
        let chunker = SentenceChunker::with_max_tokens(2);
        let chunks = chunker.split("A very long opening sentence. Ok.").unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "A very long opening sentence.");
        assert_eq!(chunks[1].text, "Ok.");
    }

    #[test]
    fn test_empty_text_rejected() {
        let chunker = SentenceChunker::with_max_tokens(DEFAULT_MAX_TOKENS);
        assert!(matches!(chunker.split(""), Err(AnalyzerError::InvalidInput(_))));
        assert!(matches!(chunker.split(" \n\t "), Err(AnalyzerError::InvalidInput(_))));
    }

    #[test]
    fn test_blank_sentences_dropped() {
        let chunker = SentenceChunker::new(LineSegmenter, 10);
        let chunks = chunker.split("alpha\n   \n\nbeta").unwrap();
        assert_eq!(chunks, vec![Chunk::new("alpha beta", 0)]);
    }

    #[test]
    fn test_custom_segmenter() {
        let chunker = SentenceChunker::new(LineSegmenter, 1);
        let chunks = chunker.split("first\nsecond").unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], Chunk::new("second", 1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Sentences of 1-11 lowercase words, each ending in an exclamation mark
    fn sentences() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::collection::vec("[a-z]{1,8}", 1..12).prop_map(|words| format!("{}!", words.join(" "))),
            1..30,
        )
    }

    proptest! {
        /// Property: chunks reconstruct every sentence in order
        #[test]
        fn test_chunks_reconstruct_text(sentences in sentences(), max_tokens in 1usize..40) {
            let text = sentences.join(" ");
            let chunks = SentenceChunker::with_max_tokens(max_tokens).split(&text).unwrap();

            prop_assert!(!chunks.is_empty());
            let rebuilt: Vec<&str> = chunks.iter().flat_map(|c| c.text.split_whitespace()).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rebuilt, original);
        }

        /// Property: only single-sentence chunks may exceed the budget
        #[test]
        fn test_budget_respected(sentences in sentences(), max_tokens in 1usize..40) {
            let text = sentences.join(" ");
            let chunks = SentenceChunker::with_max_tokens(max_tokens).split(&text).unwrap();

            for chunk in &chunks {
                if chunk.token_count() > max_tokens {
                    prop_assert!(sentences.contains(&chunk.text));
                }
            }
        }

        /// Property: sequence indices are 0..n in order
        #[test]
        fn test_sequence_indices(sentences in sentences(), max_tokens in 1usize..40) {
            let chunks = SentenceChunker::with_max_tokens(max_tokens)
                .split(&sentences.join(" "))
                .unwrap();
            for (i, chunk) in chunks.iter().enumerate() {
                prop_assert_eq!(chunk.sequence_index, i);
            }
        }
    }
}
