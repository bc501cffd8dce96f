//! Catalog Admin CLI
//!
//! Loads every catalog collection once and reports what the remote holds.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_admin::{
    ApiClient, Config, Entity, GalleryItem, MemorySession, MutationGuard, Post, Promotion,
    Synchronizer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog admin");
    tracing::info!("API base URL: {}", config.api_base_url);

    if config.api_token.is_none() {
        tracing::warn!("No session token configured (CATALOG_API_TOKEN). Requests are anonymous!");
    }

    let session = Arc::new(MemorySession::new(config.api_token.clone()));
    let client = ApiClient::from_config(&config, session);
    let guard = MutationGuard::new();

    let posts = Synchronizer::<Post>::new(client.clone(), guard.clone());
    let gallery = Synchronizer::<GalleryItem>::new(client.clone(), guard.clone());
    let promotions = Synchronizer::<Promotion>::new(client, guard);

    let (posts_result, gallery_result, promotions_result) =
        tokio::join!(posts.refresh(), gallery.refresh(), promotions.refresh());

    report(&posts, posts_result).await;
    report(&gallery, gallery_result).await;
    report(&promotions, promotions_result).await;

    Ok(())
}

async fn report<E: Entity>(
    collection: &Synchronizer<E>,
    result: Result<(), catalog_admin::AppError>,
) {
    match result {
        Ok(()) => {
            let items = collection.items().await;
            tracing::info!("{}: {} entries", E::KIND.plural(), items.len());
        }
        Err(e) => tracing::error!("{}: {}", E::KIND.plural(), e),
    }
}
