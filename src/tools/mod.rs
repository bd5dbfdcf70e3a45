use std::fmt::Debug;

pub(crate) mod env_args;
pub(crate) mod validation;

pub fn log_message_and_return<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{message}\n{error:#?}");
        value_to_return
    }
}
