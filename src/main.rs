mod catalog;
mod config;
mod conversion;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod store;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::manifest::MANIFEST;
use crate::seed::{SeedOutcome, Seeder};
use crate::store::{MemoryTimezoneStore, MongoTimezoneStore, TimezoneStore};

#[actix_web::main]
async fn main() -> Result<()> {
    // a missing .env is fine, the environment may already be set
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = open_store(&config).await?;

    // seed before accepting traffic
    match Seeder::new()
        .seed(store.as_ref(), &MANIFEST)
        .await
        .context("seeding the timezone store")?
    {
        SeedOutcome::Seeded { inserted } => {
            info!("Timezone catalog created with {} zones", inserted)
        }
        SeedOutcome::AlreadySeeded { existing } => {
            info!("Timezone catalog already holds {} zones", existing)
        }
    }

    let catalog = web::Data::new(Catalog::new(store, config.lookup_cache_capacity));
    let bind = (config.bind_address.clone(), config.port);
    let config = web::Data::new(config);

    info!("Listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(config.clone())
            .configure(routes::init)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn TimezoneStore>> {
    let Some(uri) = &config.mongodb_uri else {
        warn!("MONGODB_URI not set, using an in-memory timezone store");
        return Ok(Arc::new(MemoryTimezoneStore::new()));
    };

    let store = MongoTimezoneStore::connect(
        uri,
        &config.mongodb_database,
        &config.timezone_collection,
    )
    .await
    .context("connecting to MongoDB")?;
    store
        .ensure_indexes()
        .await
        .context("creating the timezone identifier index")?;

    Ok(Arc::new(store))
}
