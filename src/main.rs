mod encryption;
mod submission;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::web::server::build_server;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    build_server()
}
