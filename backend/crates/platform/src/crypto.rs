//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};

/// 256-bit key for symmetric signing
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}
