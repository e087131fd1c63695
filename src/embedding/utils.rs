use std::io;
use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::config::TOKENIZER_FILE;

/// Loads `tokenizer.json` from a model directory, or from an explicit file path.
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path.is_dir() {
        model_path.join(TOKENIZER_FILE)
    } else {
        model_path.to_path_buf()
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Loads a tokenizer that truncates input to `max_len` tokens.
///
/// Chunks are sized in words, not tokens, so a chunk can still exceed the encoder's window;
/// truncation keeps the forward pass within the model's position embeddings.
pub fn load_tokenizer_with_truncation(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = load_tokenizer(model_path)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    // Single-sequence encoding: padding would only dilute mean pooling.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}

/// Scales `v` to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
