//! Sentence-bounded, overlapping chunking for the embedding tier.
//!
//! Long documents are cut into segments of at most `chunk_size` words so each fits the
//! encoder's input window. Consecutive chunks share up to `overlap` words of trailing
//! sentences, so an excerpt straddling a boundary still lands whole in one chunk.
//!
//! Texts that sentence segmentation cannot usefully split (fewer than three sentences) fall
//! back to fixed word windows.


use thiserror::Error;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Minimum sentence count for sentence-bounded chunking.
pub const MIN_SENTENCES: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    #[error("chunk_size must be at least 1")]
    ZeroChunkSize,
}

/// Chunk sizing, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkerConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    pub fn validate(&self) -> Result<(), ChunkingError> {
        if self.chunk_size == 0 {
            return Err(ChunkingError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Word-window advance. Never zero, even when `overlap >= chunk_size`.
    pub fn step(&self) -> usize {
        self.chunk_size.saturating_sub(self.overlap).max(1)
    }

    /// Splits `text` with this configuration. See [`chunk`].
    pub fn chunk(&self, text: &str) -> Vec<String> {
        chunk(text, self.chunk_size, self.overlap)
    }
}

/// Splits `text` into overlapping chunks of at most `chunk_size` words.
///
/// - Text shorter than `chunk_size` characters is returned whole.
/// - Fewer than [`MIN_SENTENCES`] sentences: fixed windows of `chunk_size` words, advancing
///   by `chunk_size - overlap`.
/// - Otherwise sentences are packed greedily. On overflow the chunk is closed and the next
///   one is seeded with the closed chunk's trailing sentences totalling at most `overlap`
///   words. A single sentence longer than `chunk_size` words forms its own chunk.
///
/// Never returns an empty vector for non-empty input. A `chunk_size` of zero is treated as 1.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let config = ChunkerConfig::new(chunk_size.max(1), overlap);

    if text.chars().count() < config.chunk_size {
        return vec![text.to_string()];
    }

    let sentences: Vec<&str> = text
        .unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let chunks = if sentences.len() < MIN_SENTENCES {
        chunk_by_words(text, &config)
    } else {
        chunk_by_sentences(&sentences, &config)
    };

    debug!(
        text_len = text.len(),
        sentences = sentences.len(),
        chunks = chunks.len(),
        chunk_size = config.chunk_size,
        overlap = config.overlap,
        "Chunked text"
    );

    if chunks.is_empty() {
        return vec![text.to_string()];
    }

    chunks
}

fn chunk_by_words(text: &str, config: &ChunkerConfig) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    (0..words.len())
        .step_by(config.step())
        .map(|start| {
            let end = (start + config.chunk_size).min(words.len());
            words[start..end].join(" ")
        })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

fn chunk_by_sentences(sentences: &[&str], config: &ChunkerConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for &sentence in sentences {
        let sentence_len = word_count(sentence);

        if current_len + sentence_len <= config.chunk_size {
            current.push(sentence);
            current_len += sentence_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        if current_len > 0 && config.overlap > 0 {
            let (tail, tail_len) = overlap_tail(&current, config.overlap);
            current = tail;
            current_len = tail_len;
        } else {
            current.clear();
            current_len = 0;
        }

        current.push(sentence);
        current_len += sentence_len;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}

/// Longest suffix of `sentences` whose word count stays within `overlap`, in original order.
fn overlap_tail<'a>(sentences: &[&'a str], overlap: usize) -> (Vec<&'a str>, usize) {
    let mut taken = 0usize;
    let mut words = 0usize;

    for sentence in sentences.iter().rev() {
        let len = word_count(sentence);
        if words + len > overlap {
            break;
        }
        words += len;
        taken += 1;
    }

    (sentences[sentences.len() - taken..].to_vec(), words)
}

#[inline]
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
