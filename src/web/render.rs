use std::collections::HashMap;

use derive_getters::Getters;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket_dyn_templates::{Template, context};
use serde::Serialize;

use crate::submission::error::ValidationError;
use crate::submission::error::ValidationError::{HoneypotDetected, MissingToRecipient};
use crate::submission::{ResponseFormat, ValidSubmission};

const SUCCESS_TEMPLATE: &str = "receive-success";
const HONEYPOT_TEMPLATE: &str = "honeypot-detected";
const MISSING_RECIPIENT_TEMPLATE: &str = "missing-recipient";
const INVALID_RECIPIENT_TEMPLATE: &str = "invalid-recipient";

const SUCCESS_MESSAGE: &str = "Your submission has been accepted.";

/// Message payload of JSON responses.
#[derive(Debug, Getters, Serialize)]
pub struct ReceiveMessage {
    message: String,
}

impl ReceiveMessage {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

#[derive(Responder)]
pub enum ReceiveResponse {
    Page(Custom<Template>),
    Payload(Custom<Json<ReceiveMessage>>),
    Text(Custom<String>),
    Redirect(Redirect),
}

/// Renders an accepted submission in its requested format.
/// A submission carrying a redirect answers 303 to the redirect target.
pub fn success(submission: &ValidSubmission) -> ReceiveResponse {
    match submission.response_format() {
        ResponseFormat::Html => ReceiveResponse::Page(Custom(
            Status::Ok,
            Template::render(SUCCESS_TEMPLATE, context! { message: SUCCESS_MESSAGE }),
        )),
        ResponseFormat::Json => ReceiveResponse::Payload(Custom(
            Status::Ok,
            Json(ReceiveMessage::new(SUCCESS_MESSAGE.to_owned())),
        )),
        ResponseFormat::Plain => match submission.redirect_url() {
            Some(redirect_url) => ReceiveResponse::Redirect(Redirect::to(redirect_url.clone())),
            None => ReceiveResponse::Text(Custom(Status::Ok, SUCCESS_MESSAGE.to_owned())),
        },
    }
}

/// Renders a rejection. Html responses carry the submitted fields so the
/// front end can offer them back for correction.
pub fn failure(
    error: &ValidationError,
    format: ResponseFormat,
    fields: &HashMap<String, String>,
) -> ReceiveResponse {
    let status = status_for(error);
    match format {
        ResponseFormat::Html | ResponseFormat::Plain => ReceiveResponse::Page(Custom(
            status,
            Template::render(
                template_for(error),
                context! { message: error.to_string(), fields: fields },
            ),
        )),
        ResponseFormat::Json => ReceiveResponse::Payload(Custom(
            status,
            Json(ReceiveMessage::new(error.to_string())),
        )),
    }
}

fn status_for(error: &ValidationError) -> Status {
    match error {
        HoneypotDetected => Status::Forbidden,
        _ => Status::UnprocessableEntity,
    }
}

fn template_for(error: &ValidationError) -> &'static str {
    match error {
        HoneypotDetected => HONEYPOT_TEMPLATE,
        MissingToRecipient => MISSING_RECIPIENT_TEMPLATE,
        _ => INVALID_RECIPIENT_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use parameterized::{ide, parameterized};
    use rocket::http::Status;

    use crate::submission::ResponseFormat::{Html, Json, Plain};
    use crate::submission::error::ValidationError;
    use crate::submission::error::ValidationError::{
        HoneypotDetected, InvalidRecipient, InvalidRedirectUrl, InvalidResponseFormat,
        MissingToRecipient,
    };
    use crate::submission::recipients::{RecipientField, RecipientSet};
    use crate::submission::{ResponseFormat, ValidSubmission};
    use crate::web::render::{
        HONEYPOT_TEMPLATE, INVALID_RECIPIENT_TEMPLATE, MISSING_RECIPIENT_TEMPLATE,
        ReceiveResponse, failure, status_for, success, template_for,
    };

    ide!();

    fn valid_submission(format: ResponseFormat, redirect_url: Option<String>) -> ValidSubmission {
        let mut recipients = RecipientSet::default();
        recipients.add(RecipientField::To, "address@example.com".to_owned());
        ValidSubmission::new(recipients, format, redirect_url)
    }

    // region success
    #[test]
    fn should_render_success_page() {
        let submission = valid_submission(Html, None);

        let response = success(&submission);

        assert!(matches!(
            response,
            ReceiveResponse::Page(custom) if custom.0 == Status::Ok
        ));
    }

    #[test]
    fn should_render_success_payload() {
        let submission = valid_submission(Json, None);

        let response = success(&submission);

        assert!(matches!(
            response,
            ReceiveResponse::Payload(custom) if custom.0 == Status::Ok
        ));
    }

    #[test]
    fn should_redirect_after_success() {
        let submission = valid_submission(Plain, Some("https://example.com/thanks".to_owned()));

        let response = success(&submission);

        assert!(matches!(response, ReceiveResponse::Redirect(_)));
    }

    #[test]
    fn should_render_plain_success_without_redirect() {
        let submission = valid_submission(Plain, None);

        let response = success(&submission);

        assert!(matches!(
            response,
            ReceiveResponse::Text(custom) if custom.0 == Status::Ok
        ));
    }
    // endregion

    // region failure
    #[test]
    fn should_render_failure_page_with_submitted_fields() {
        let fields = HashMap::from([("_to".to_owned(), "not-an-email".to_owned())]);

        let response = failure(&InvalidRecipient(RecipientField::To), Html, &fields);

        assert!(matches!(
            response,
            ReceiveResponse::Page(custom) if custom.0 == Status::UnprocessableEntity
        ));
    }

    #[test]
    fn should_render_failure_payload() {
        let response = failure(&HoneypotDetected, Json, &HashMap::new());

        match response {
            ReceiveResponse::Payload(custom) => {
                assert_eq!(Status::Forbidden, custom.0);
                assert_eq!("You shall not pass.", custom.1.message());
            }
            _ => panic!("Expected a JSON payload"),
        }
    }

    #[parameterized(
        error = {
            HoneypotDetected,
            InvalidResponseFormat,
            InvalidRecipient(RecipientField::Cc),
            MissingToRecipient,
            InvalidRedirectUrl,
        },
        expected_status = {
            Status::Forbidden,
            Status::UnprocessableEntity,
            Status::UnprocessableEntity,
            Status::UnprocessableEntity,
            Status::UnprocessableEntity,
        }
    )]
    fn should_map_error_to_status(error: ValidationError, expected_status: Status) {
        assert_eq!(expected_status, status_for(&error));
    }

    #[parameterized(
        error = {
            HoneypotDetected,
            InvalidResponseFormat,
            InvalidRecipient(RecipientField::Bcc),
            MissingToRecipient,
            InvalidRedirectUrl,
        },
        expected_template = {
            HONEYPOT_TEMPLATE,
            INVALID_RECIPIENT_TEMPLATE,
            INVALID_RECIPIENT_TEMPLATE,
            MISSING_RECIPIENT_TEMPLATE,
            INVALID_RECIPIENT_TEMPLATE,
        }
    )]
    fn should_map_error_to_template(error: ValidationError, expected_template: &str) {
        assert_eq!(expected_template, template_for(&error));
    }
    // endregion
}
