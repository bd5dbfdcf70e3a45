use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

use crate::encryption::EmailCipher;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::{encrypt_controller, receive_controller};

const PORT_ARG: &str = "--port";
const ENCRYPTION_KEY_ARG: &str = "--encryption-key";
const DEFAULT_PORT: i32 = 8000;

pub fn build_server() -> Rocket<Build> {
    let cipher = match get_email_cipher() {
        Some(cipher) => cipher,
        None => {
            error!("Missing `{ENCRYPTION_KEY_ARG}` arg.");
            panic!("Initialization failed, aborting.");
        }
    };

    rocket::build()
        .configure(rocket::Config::figment().merge(("port", get_port())))
        .manage(cipher)
        .mount(
            "/",
            routes![
                receive_controller::receive,
                receive_controller::receive_to,
                encrypt_controller::encrypt_address,
            ],
        )
        .register("/", catchers![receive_controller::not_found])
        .attach(Template::fairing())
}

fn get_port() -> i32 {
    retrieve_arg_value(PORT_ARG)
        .and_then(|port| port.parse::<i32>().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn get_email_cipher() -> Option<EmailCipher> {
    retrieve_arg_value(ENCRYPTION_KEY_ARG)
        .filter(|key| !key.is_empty())
        .map(|key| EmailCipher::new(&key))
}

#[cfg(test)]
mod tests {
    use crate::tools::env_args::with_env_args;
    use crate::web::server::{DEFAULT_PORT, get_email_cipher, get_port};

    const PORT_ARG: &str = "--port";
    const ENCRYPTION_KEY_ARG: &str = "--encryption-key";

    // region get_port
    #[test]
    fn should_get_custom_port() {
        let expected_port = 10;
        let port = with_env_args(vec![format!("{PORT_ARG}={expected_port}")], get_port);

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_get_default_port_when_wrong_type() {
        let port = with_env_args(vec![format!("{PORT_ARG}=doe")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_arg() {
        let port = with_env_args(vec![], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }
    // endregion

    // region get_email_cipher
    #[test]
    fn should_get_email_cipher() {
        let cipher = with_env_args(
            vec![format!("{ENCRYPTION_KEY_ARG}=secret")],
            get_email_cipher,
        );

        assert!(cipher.is_some());
    }

    #[test]
    fn should_not_get_email_cipher_when_empty_key() {
        let cipher = with_env_args(vec![format!("{ENCRYPTION_KEY_ARG}=")], get_email_cipher);

        assert!(cipher.is_none());
    }

    #[test]
    fn should_not_get_email_cipher_when_no_arg() {
        let cipher = with_env_args(vec![], get_email_cipher);

        assert!(cipher.is_none());
    }
    // endregion
}
