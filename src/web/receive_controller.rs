use std::collections::HashMap;

use log::debug;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};

use crate::encryption::EmailCipher;
use crate::submission::parser::{TransportEvent, parse};
use crate::submission::recipients::RecipientField;
use crate::submission::validator::{failure_format, validate};
use crate::web::render;
use crate::web::render::ReceiveResponse;

#[post("/receive?<params..>", data = "<body>")]
pub async fn receive(
    params: HashMap<String, String>,
    body: String,
    cipher: &State<EmailCipher>,
) -> ReceiveResponse {
    let event = TransportEvent::new(Some(body), None, Some(params));
    handle_receive(&event, cipher)
}

/// Variant with the recipient carried by the path, for forms whose action
/// already names the destination address or token.
#[post("/receive/<address>?<params..>", data = "<body>")]
pub async fn receive_to(
    address: String,
    params: HashMap<String, String>,
    body: String,
    cipher: &State<EmailCipher>,
) -> ReceiveResponse {
    let path_parameters = HashMap::from([(
        RecipientField::To.field_name().to_owned(),
        address,
    )]);
    let event = TransportEvent::new(Some(body), Some(path_parameters), Some(params));
    handle_receive(&event, cipher)
}

fn handle_receive(event: &TransportEvent, cipher: &EmailCipher) -> ReceiveResponse {
    let fields = parse(event);
    match validate(&fields, cipher) {
        Ok(submission) => render::success(&submission),
        Err(error) => {
            debug!("Submission rejected [error: {error}]");
            render::failure(&error, failure_format(&fields), &fields)
        }
    }
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            uri: req.uri()
        },
    )
}
