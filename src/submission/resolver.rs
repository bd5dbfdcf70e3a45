use crate::encryption::EmailCipher;
use crate::tools::validation::is_email;

/// Resolves a raw recipient token into an email address.
///
/// A token is first taken at face value: most callers send plain addresses,
/// which skips the decrypt call entirely. Anything else is treated as an
/// encrypted recipient token and opened with the service key; the result is
/// only accepted when it is itself a valid address. The ciphertext is never
/// returned as an address.
///
/// "Can't be decrypted" and "decrypted to something that is not an address"
/// both mean the same thing here: the token does not resolve.
pub fn resolve(raw_token: &str, cipher: &EmailCipher) -> Option<String> {
    if is_email(raw_token) {
        return Some(raw_token.to_owned());
    }

    cipher
        .decrypt(raw_token)
        .ok()
        .filter(|plaintext| is_email(plaintext))
}
