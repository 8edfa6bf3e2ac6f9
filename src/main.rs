use std::str::FromStr;

mod actions;
mod config;
mod endpoints;
mod json;
mod player;
mod render;
mod roster;
mod view;

#[cfg(test)]
mod tests;

use config::Config;
use endpoints::App;
use log::info;
use rocket::{Build, Rocket, launch, routes};
use roster::HttpRoster;
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};

fn make_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = ["Get", "Post"]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect();

    CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

/// Builds the page host for the roster described by `config`
fn build(config: &Config) -> Rocket<Build> {
    let cors = make_cors().to_cors().expect("Error creating CORS fairing");
    let roster = HttpRoster::new(&config.api);
    info!("Managing the roster at {}", roster.endpoint());

    rocket::build()
        .attach(cors)
        .manage(App::new(roster))
        .mount("/", routes![endpoints::index, endpoints::dispatch_action])
}

#[launch]
fn rocket() -> _ {
    // tests build the rocket more than once
    let _ = env_logger::try_init();
    let config = Config::load().expect("Error loading config.toml");
    build(&config)
}
