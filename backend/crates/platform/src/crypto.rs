//! Cryptographic Utilities

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 tag in bytes
pub const HMAC_SHA256_LEN: usize = 32;

/// Length of an AES-256 key in bytes
pub const AES256_KEY_LEN: usize = 32;

/// Length of the AES-GCM nonce prepended to every sealed message
const AES_GCM_NONCE_LEN: usize = 12;

/// Symmetric encryption failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("Encryption key must be {expected} bytes (got {actual})")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Encryption failed")]
    Encryption,

    #[error("Ciphertext is malformed or was not sealed with this key")]
    Decryption,
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute HMAC-SHA256 over `data`
///
/// Keys of any length are accepted; longer than the block size they are
/// hashed first, as RFC 2104 requires.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; HMAC_SHA256_LEN] {
    let mut mac = mac_for(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Verify an HMAC-SHA256 tag in constant time
pub fn verify_hmac_sha256(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
    let mut mac = mac_for(key);
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}

/// Encrypt with AES-256-GCM under a fresh random nonce
///
/// Output is `nonce || ciphertext || tag`.
pub fn encrypt_aes256_gcm(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher_for(key)?;

    let nonce_bytes = random_bytes(AES_GCM_NONCE_LEN);
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| CryptoError::Encryption)?;

    let mut sealed = nonce_bytes;
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Open a message produced by [`encrypt_aes256_gcm`]
pub fn decrypt_aes256_gcm(key: &[u8], sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher_for(key)?;

    if sealed.len() < AES_GCM_NONCE_LEN {
        return Err(CryptoError::Decryption);
    }
    let (nonce_bytes, ciphertext) = sealed.split_at(AES_GCM_NONCE_LEN);

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::Decryption)
}

fn cipher_for(key: &[u8]) -> Result<Aes256Gcm, CryptoError> {
    Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength {
        expected: AES256_KEY_LEN,
        actual: key.len(),
    })
}

fn mac_for(key: &[u8]) -> HmacSha256 {
    <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC can take key of any size")
}

/// Encode bytes as unpadded URL-safe base64 (cookie-safe alphabet)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded URL-safe base64
pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(tag.to_vec(), expected);
    }

    #[test]
    fn test_verify_hmac() {
        let key = [7u8; 64];
        let tag = hmac_sha256(&key, b"session|payload");

        assert!(verify_hmac_sha256(&key, b"session|payload", &tag));
        assert!(!verify_hmac_sha256(&key, b"session|payloaD", &tag));
        assert!(!verify_hmac_sha256(&[8u8; 64], b"session|payload", &tag));
        assert!(!verify_hmac_sha256(&key, b"session|payload", &tag[..31]));
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
        assert_ne!(random_bytes(32), bytes);
    }

    #[test]
    fn test_aes_gcm_seal_open() {
        let key = [3u8; AES256_KEY_LEN];
        let plaintext = br#"{"name":"alice"}"#;
        let sealed = encrypt_aes256_gcm(&key, plaintext).unwrap();

        assert_eq!(sealed.len(), AES_GCM_NONCE_LEN + plaintext.len() + 16);
        assert!(!sealed.windows(5).any(|w| w == b"alice"));
        assert_eq!(decrypt_aes256_gcm(&key, &sealed).unwrap(), plaintext);
    }

    #[test]
    fn test_aes_gcm_fresh_nonce_each_time() {
        let key = [3u8; AES256_KEY_LEN];
        assert_ne!(
            encrypt_aes256_gcm(&key, b"same").unwrap(),
            encrypt_aes256_gcm(&key, b"same").unwrap()
        );
    }

    #[test]
    fn test_aes_gcm_rejects_wrong_key_and_tampering() {
        let key = [3u8; AES256_KEY_LEN];
        let mut sealed = encrypt_aes256_gcm(&key, b"payload").unwrap();

        assert_eq!(
            decrypt_aes256_gcm(&[4u8; AES256_KEY_LEN], &sealed),
            Err(CryptoError::Decryption)
        );

        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert_eq!(decrypt_aes256_gcm(&key, &sealed), Err(CryptoError::Decryption));
        assert_eq!(decrypt_aes256_gcm(&key, b"short"), Err(CryptoError::Decryption));
    }

    #[test]
    fn test_aes_gcm_key_length_checked() {
        assert_eq!(
            encrypt_aes256_gcm(&[0u8; 16], b"x"),
            Err(CryptoError::InvalidKeyLength {
                expected: 32,
                actual: 16
            })
        );
    }

    #[test]
    fn test_base64_url_is_cookie_safe() {
        let encoded = to_base64_url(&[0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");
        assert_eq!(from_base64_url(&encoded).unwrap(), vec![0xfb, 0xff, 0xfe]);
        assert!(from_base64_url("not base64!").is_err());
    }
}
