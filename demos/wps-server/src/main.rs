//! Work Package Service binary.
//!
//! Wires [`wps_config::Settings`] into the document store, access oracle
//! client, identity verifier, and token codec collaborators, then serves
//! the HTTP surface assembled by `wps-http`.
//!
//! The dataset-change event consumer (component F's wire client) is an
//! external collaborator and is not started here; running one means
//! pairing a real bus client with `wps_events::drive` in a separate
//! process or task.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wps_access::AccessOracleClient;
use wps_auth::IdentityVerifier;
use wps_config::Settings;
use wps_crypto::TokenCodec;
use wps_manager::WorkPackageManager;
use wps_store::{MongoDatasetStore, MongoWorkPackageStore, WorkPackageStore};

/// Periodically removes expired work packages. Deployments backed by a
/// MongoDB TTL index instead should leave `sweep_interval_secs` unset.
async fn run_expiry_sweep<WS: WorkPackageStore>(store: Arc<WS>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        match store.delete_expired_before(chrono::Utc::now()).await {
            Ok(removed) if removed > 0 => tracing::debug!(removed, "swept expired work packages"),
            Ok(_) => {}
            Err(error) => tracing::warn!(%error, "expired work package sweep failed"),
        }
    }
}

fn parse_algorithm(name: &str) -> Algorithm {
    match name {
        "ES256" => Algorithm::ES256,
        "ES384" => Algorithm::ES384,
        "RS256" => Algorithm::RS256,
        other => panic!("unsupported auth algorithm in configuration: {other}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "wps_server=info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load(None).expect("failed to load configuration");
    tracing::info!(service_instance_id = %settings.service_instance_id, "starting work package service");

    let mongo_timeout = Duration::from_secs(settings.mongo_timeout_secs);
    let dataset_store = Arc::new(
        MongoDatasetStore::connect(&settings.mongo_dsn, &settings.db_name, &settings.dataset_collection, mongo_timeout)
            .await
            .expect("failed to connect the dataset store"),
    );
    let work_package_store = Arc::new(
        MongoWorkPackageStore::connect(
            &settings.mongo_dsn,
            &settings.db_name,
            &settings.work_package_collection,
            mongo_timeout,
        )
        .await
        .expect("failed to connect the work package store"),
    );

    if let Some(interval_secs) = settings.sweep_interval_secs {
        let sweep_store = work_package_store.clone();
        tokio::spawn(run_expiry_sweep(sweep_store, Duration::from_secs(interval_secs)));
    }

    let access_oracle = Arc::new(AccessOracleClient::new(settings.access_url.clone()));

    let algorithms: Vec<Algorithm> = settings.auth_algs.iter().map(|a| parse_algorithm(a)).collect();
    let identity_verifier =
        IdentityVerifier::new(settings.auth_key.as_bytes(), &algorithms).expect("auth_key is not a valid EC public key");
    let token_codec = TokenCodec::from_ec_pem(settings.work_package_signing_key.as_bytes())
        .expect("work_package_signing_key is not a valid EC private key");

    let manager = Arc::new(WorkPackageManager::new(
        identity_verifier,
        token_codec,
        dataset_store,
        work_package_store,
        access_oracle,
        settings.valid_days,
    ));

    let app = wps_http::router(manager);

    let addr =
        SocketAddr::new(settings.server_host.parse().expect("server_host is not a valid IP address"), settings.server_port);
    tracing::info!(%addr, "work package service listening");

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind server address");
    axum::serve(listener, app).await.expect("server exited unexpectedly");
}
