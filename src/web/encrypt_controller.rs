use derive_getters::Getters;
use rocket::State;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::Serialize;

use crate::encryption::EmailCipher;
use crate::tools::log_message_and_return;
use crate::tools::validation::is_email;

/// Token issued for an address, ready to be embedded in public form HTML in
/// place of the address itself.
#[derive(Debug, Getters, Serialize)]
pub struct EncryptedAddress {
    encrypted: String,
}

impl EncryptedAddress {
    pub fn new(encrypted: String) -> Self {
        Self { encrypted }
    }
}

#[get("/encrypt/<address>")]
pub async fn encrypt_address(
    address: String,
    cipher: &State<EmailCipher>,
) -> Result<Json<EncryptedAddress>, Custom<String>> {
    if !is_email(&address) {
        return Err(Custom(
            Status::UnprocessableEntity,
            format!("'{address}' is not a valid email address."),
        ));
    }

    cipher
        .encrypt(&address)
        .map(|token| Json(EncryptedAddress::new(token)))
        .map_err(log_message_and_return(
            "Can't encrypt the provided address.",
            Custom(
                Status::InternalServerError,
                "The address can't be encrypted.".to_owned(),
            ),
        ))
}
