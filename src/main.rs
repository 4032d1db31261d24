use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use santiago_school::config::AppConfig;
use santiago_school::routes;
use santiago_school::runtime::{cors, lifetime, logging};
use santiago_school::utils::{json_error_handler, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();
    let started = Instant::now();

    AppConfig::init().map_err(|e| std::io::Error::other(e.to_string()))?;
    let config = AppConfig::get();
    config.validate().map_err(std::io::Error::other)?;

    let _log_guard = logging::init_tracing(config);

    info!(
        "{} {} ({}) starting, environment: {}",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_NAME"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let storage = startup.storage;
    let cache = startup.cache;
    let providers = startup.providers;

    debug!(
        "Pre-startup processing completed in {} ms",
        started.elapsed().as_millis()
    );
    info!("Using {} workers", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors::build_cors(&config.cors))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(providers.clone()))
            .configure(routes::configure_session_routes)
            .configure(routes::configure_profile_routes)
            .configure(routes::configure_user_routes)
            .configure(routes::configure_grade_routes)
            .configure(routes::configure_person_routes)
            .configure(routes::configure_student_routes)
            .configure(routes::configure_enrollment_routes)
            .configure(routes::configure_contract_routes)
            .configure(routes::configure_agreement_routes)
            .configure(routes::configure_debit_routes)
            .configure(routes::configure_payment_routes)
            .configure(routes::configure_discharge_routes)
            .configure(routes::configure_file_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    let server = {
        #[cfg(unix)]
        {
            if let Some(socket_path) = config.unix_socket_path() {
                warn!("Listening on Unix socket {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                server.bind_uds(socket_path)?
            } else {
                warn!("Listening on http://{}", config.server_bind_address());
                server.bind(config.server_bind_address())?
            }
        }

        #[cfg(not(unix))]
        {
            warn!("Listening on http://{}", config.server_bind_address());
            server.bind(config.server_bind_address())?
        }
    }
    .run();

    tokio::select! {
        res = server => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal received, server stopped");
        }
    }

    Ok(())
}
