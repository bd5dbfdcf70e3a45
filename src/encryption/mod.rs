use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::encryption::EncryptionError::{CantDecryptToken, CantEncryptAddress};
use crate::tools::log_message_and_return;

/// XChaCha20 nonce length. The nonce is prepended to the sealed address,
/// so a token is only usable when it is at least this long.
const NONCE_LENGTH: usize = 24;

/// Symmetric cipher turning email addresses into opaque tokens and back.
/// Tokens are issued by the service itself so that a site owner's real
/// address never appears in public form HTML.
pub struct EmailCipher {
    key: [u8; 32],
}

impl EmailCipher {
    /// Derives a 256-bit key from the configured key string.
    pub fn new(encryption_key: &str) -> Self {
        Self {
            key: Sha256::digest(encryption_key.as_bytes()).into(),
        }
    }

    /// Seals an address into a url-safe base64 token of `nonce + ciphertext`.
    pub fn encrypt(&self, address: &str) -> Result<String, EncryptionError> {
        let cipher = XChaCha20Poly1305::new((&self.key).into());
        let mut nonce = [0u8; NONCE_LENGTH];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = cipher
            .encrypt(XNonce::from_slice(&nonce), address.as_bytes())
            .map_err(log_message_and_return(
                "Can't encrypt address",
                CantEncryptAddress,
            ))?;

        let mut token = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        token.extend_from_slice(&nonce);
        token.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(token))
    }

    /// Opens a token back into its plaintext.
    /// Fails on any input that is not a token sealed with the same key.
    /// Whether the plaintext is a usable email address is not this layer's
    /// concern.
    pub fn decrypt(&self, token: &str) -> Result<String, EncryptionError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CantDecryptToken)?;
        if bytes.len() <= NONCE_LENGTH {
            return Err(CantDecryptToken);
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_LENGTH);
        let cipher = XChaCha20Poly1305::new((&self.key).into());
        let plaintext = cipher
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| CantDecryptToken)?;

        String::from_utf8(plaintext).map_err(|_| CantDecryptToken)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EncryptionError {
    #[error("The address can't be encrypted.")]
    CantEncryptAddress,
    #[error("The token can't be decrypted.")]
    CantDecryptToken,
}
