use thiserror::Error;

use crate::submission::recipients::RecipientField;

/// Why a submission was rejected. Every variant is recoverable by the
/// caller: correct the named field and resubmit.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("You shall not pass.")]
    HoneypotDetected,
    #[error("Invalid response format in the query string.")]
    InvalidResponseFormat,
    #[error("Invalid email in '{0}' field.")]
    InvalidRecipient(RecipientField),
    #[error("Please provide a recipient in '_to' field.")]
    MissingToRecipient,
    #[error("Invalid website URL in '_redirect' field.")]
    InvalidRedirectUrl,
}
