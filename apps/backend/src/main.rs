use actix_web::{web, App, HttpServer};
use tycoon_backend::config::db::{DbKind, RuntimeEnv};
use tycoon_backend::config::roster::RosterConfig;
use tycoon_backend::infra::state::build_state;
use tycoon_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use tycoon_backend::routes;
use tycoon_backend::state::security_config::SecurityConfig;
use tycoon_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            tracing::error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = SecurityConfig::from_env().and_then(|security| {
        Ok((security, DbKind::from_env()?, RosterConfig::from_env()?))
    });
    let (security_config, db_kind, roster_config) = match config {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_security(security_config)
        .with_roster(roster_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(%host, port, "tycoon backend listening");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
