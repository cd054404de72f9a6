//! Demo bootstrap wired around the initialization barrier.

use std::time::Duration;

use init_barrier::{BoxError, InitBarrier, Initializer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "init_barrier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("demo bootstrap starting");

    let barrier = InitBarrier::new(vec![
        Initializer::sync("settings", || {
            tracing::info!("settings loaded");
            Ok::<_, BoxError>(())
        }),
        Initializer::deferred("warm-cache", || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            tracing::info!("cache warmed");
            Ok::<_, BoxError>(())
        }),
    ]);

    let readiness = barrier.readiness();
    barrier.run().await;

    match readiness.wait().await {
        Ok(()) => tracing::info!(completed = barrier.is_completed(), "bootstrap ready"),
        Err(err) => {
            tracing::error!(error = %err, "bootstrap failed");
            std::process::exit(1);
        }
    }
}
