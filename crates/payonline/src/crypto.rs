//! Digest primitives for request signing.

use crate::errors::{CryptoError, CustomResult};

/// Trait for generating a digest over a message
pub trait GenerateDigest {
    /// Takes a message and returns the calculated digest as bytes
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, CryptoError>;
}

/// MD5 hash function
#[derive(Debug)]
pub struct Md5;

impl GenerateDigest for Md5 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, CryptoError> {
        let digest = md5::compute(message);
        Ok(digest.as_ref().to_vec())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::GenerateDigest;

    #[test]
    fn test_md5_digest() {
        let message = "abcdefghijklmnopqrstuvwxyz".as_bytes();
        assert_eq!(
            hex::encode(super::Md5.generate_digest(message).expect("Digest")),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
    }
}
