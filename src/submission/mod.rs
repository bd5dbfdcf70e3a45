use derive_getters::Getters;

use crate::submission::recipients::RecipientSet;

pub(crate) mod error;
pub(crate) mod parser;
pub(crate) mod recipients;
pub(crate) mod resolver;
pub(crate) mod validator;

pub const FORMAT_FIELD: &str = "format";
pub const HONEYPOT_FIELD: &str = "_honeypot";
pub const REDIRECT_FIELD: &str = "_redirect";

/// How the response to a submission should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Html,
    Json,
    Plain,
}

impl ResponseFormat {
    /// Accepted values of the `format` field.
    /// `Plain` is never requested directly: it is forced by a validated
    /// redirect.
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "html" => Some(ResponseFormat::Html),
            "json" => Some(ResponseFormat::Json),
            _ => None,
        }
    }
}

/// A submission that passed every check and is safe to build an email from.
#[derive(Debug, PartialEq, Getters)]
pub struct ValidSubmission {
    recipients: RecipientSet,
    response_format: ResponseFormat,
    redirect_url: Option<String>,
}

impl ValidSubmission {
    pub fn new(
        recipients: RecipientSet,
        response_format: ResponseFormat,
        redirect_url: Option<String>,
    ) -> Self {
        Self {
            recipients,
            response_format,
            redirect_url,
        }
    }
}
