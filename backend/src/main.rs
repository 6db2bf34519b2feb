mod config;
mod services;

use std::io;
use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use console_common::api::SERVICE_PREFIXES;
use env_logger::Env;
use log::info;

use crate::config::ServerConfig;
use crate::services::proxy::{self, Upstream};

/// CSV uploads travel as JSON text, so request bodies may be large.
const MAX_PAYLOAD_BYTES: usize = 64 * 1024 * 1024;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let upstream = web::Data::new(Upstream::new(&config).map_err(io::Error::other)?);
    let url = config.browser_url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);
    info!(
        "Forwarding {} to {} (timeout {}s)",
        SERVICE_PREFIXES.join(", "),
        config.upstream,
        config.proxy_timeout.as_secs()
    );

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .app_data(upstream.clone());
        SERVICE_PREFIXES
            .iter()
            .fold(app, |app, prefix| {
                app.service(proxy::configure_routes(prefix.trim_end_matches('/')))
            })
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
