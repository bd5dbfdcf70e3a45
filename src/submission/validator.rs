use std::collections::HashMap;

use crate::encryption::EmailCipher;
use crate::submission::error::ValidationError;
use crate::submission::error::ValidationError::{
    HoneypotDetected, InvalidRecipient, InvalidRedirectUrl, InvalidResponseFormat,
    MissingToRecipient,
};
use crate::submission::recipients::{RecipientField, RecipientSet};
use crate::submission::resolver::resolve;
use crate::submission::{
    FORMAT_FIELD, HONEYPOT_FIELD, REDIRECT_FIELD, ResponseFormat, ValidSubmission,
};
use crate::tools::validation::is_website;

/// Runs the ordered checks over a flattened field mapping.
/// The first failing check rejects the submission; later checks rely on
/// earlier ones having passed, so the order is part of the contract:
/// response format, honeypot, single recipients, delimited recipients,
/// mandatory `_to`, redirect.
pub fn validate(
    fields: &HashMap<String, String>,
    cipher: &EmailCipher,
) -> Result<ValidSubmission, ValidationError> {
    let response_format = check_response_format(fields)?;
    check_honeypot(fields)?;

    let mut recipients = RecipientSet::default();
    resolve_single_recipients(fields, cipher, &mut recipients)?;
    resolve_delimited_recipients(fields, cipher, &mut recipients)?;
    check_to_recipient(&recipients)?;

    let redirect_url = check_redirect(fields)?;
    let response_format = match redirect_url {
        Some(_) => ResponseFormat::Plain,
        None => response_format,
    };

    Ok(ValidSubmission::new(recipients, response_format, redirect_url))
}

/// Format used to render a rejection: the requested format when it parsed,
/// Html otherwise.
pub fn failure_format(fields: &HashMap<String, String>) -> ResponseFormat {
    check_response_format(fields).unwrap_or_default()
}

fn check_response_format(
    fields: &HashMap<String, String>,
) -> Result<ResponseFormat, ValidationError> {
    match fields.get(FORMAT_FIELD) {
        None => Ok(ResponseFormat::default()),
        Some(format) => ResponseFormat::from_field(format).ok_or(InvalidResponseFormat),
    }
}

/// The honeypot field is hidden from humans; any non-empty value means a bot
/// filled the form in.
fn check_honeypot(fields: &HashMap<String, String>) -> Result<(), ValidationError> {
    match fields.get(HONEYPOT_FIELD) {
        Some(value) if !value.is_empty() => Err(HoneypotDetected),
        _ => Ok(()),
    }
}

fn resolve_single_recipients(
    fields: &HashMap<String, String>,
    cipher: &EmailCipher,
    recipients: &mut RecipientSet,
) -> Result<(), ValidationError> {
    for field in RecipientField::SINGLE {
        if let Some(raw_token) = fields.get(field.field_name()) {
            let address = resolve(raw_token, cipher).ok_or(InvalidRecipient(*field))?;
            recipients.add(*field, address);
        }
    }

    Ok(())
}

/// Every token of a delimited field must resolve; a single bad token rejects
/// the whole field. Empty tokens left by a trailing `;` are not filtered and
/// fail like any other unresolvable token.
fn resolve_delimited_recipients(
    fields: &HashMap<String, String>,
    cipher: &EmailCipher,
    recipients: &mut RecipientSet,
) -> Result<(), ValidationError> {
    for field in RecipientField::DELIMITED {
        if let Some(raw_value) = fields.get(field.field_name()) {
            for raw_token in raw_value.split(';') {
                let address = resolve(raw_token, cipher).ok_or(InvalidRecipient(*field))?;
                recipients.add(*field, address);
            }
        }
    }

    Ok(())
}

fn check_to_recipient(recipients: &RecipientSet) -> Result<(), ValidationError> {
    match recipients.to() {
        Some(_) => Ok(()),
        None => Err(MissingToRecipient),
    }
}

fn check_redirect(fields: &HashMap<String, String>) -> Result<Option<String>, ValidationError> {
    match fields.get(REDIRECT_FIELD) {
        None => Ok(None),
        Some(url) if is_website(url) => Ok(Some(url.clone())),
        Some(_) => Err(InvalidRedirectUrl),
    }
}
