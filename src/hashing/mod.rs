//! BLAKE3 helpers for cache keys and feature hashing.

use blake3::Hasher;

/// Full 32-byte BLAKE3 digest of `text`. Used as the embedding cache key.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Digest of `text` scoped to a backend, so two backends never share cache entries.
#[inline]
pub fn hash_scoped(scope: &str, text: &str) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(scope.as_bytes());
    hasher.update(b"|");
    hasher.update(text.as_bytes());
    *hasher.finalize().as_bytes()
}

/// First 8 bytes of the BLAKE3 digest as a little-endian `u64`.
///
/// Collisions only cost accuracy in feature hashing; use [`hash_text`] where identity matters.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
