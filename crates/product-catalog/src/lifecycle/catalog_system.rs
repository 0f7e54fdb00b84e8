use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::catalog_actor;
use crate::clients::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::ids::{IdGenerator, UuidIds};
use crate::seed::Seed;
use crate::session::CatalogSession;

/// A running catalog session and the client used to drive it.
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub catalog_client: CatalogClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: JoinHandle<CatalogSession>,
}

impl CatalogSystem {
    /// Loads the configured seed and starts the session actor with UUID ids.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let seed = match &config.seed_path {
            Some(path) => Seed::from_path(path)?,
            None => Seed::embedded()?,
        };
        Self::with_parts(seed, config, Arc::new(UuidIds))
    }

    /// Starts the session actor from an explicit seed and id generator.
    ///
    /// Fails with [`CatalogError::InvalidConfig`] when `mailbox_capacity` is zero.
    pub fn with_parts(
        seed: Seed,
        config: &CatalogConfig,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self, CatalogError> {
        if config.mailbox_capacity == 0 {
            return Err(CatalogError::InvalidConfig(
                "mailbox capacity must be greater than zero".to_string(),
            ));
        }

        let session = CatalogSession::new(seed, config.rules.clone())?;
        info!(
            products = session.products().len(),
            categories = session.categories().len(),
            "Catalog session created"
        );

        let (actor, client) = catalog_actor::new(session, config.mailbox_capacity);
        let handle = tokio::spawn(actor.run(ids));

        Ok(Self {
            catalog_client: CatalogClient::new(client),
            handle,
        })
    }

    /// Gracefully shuts down the actor and returns the final session state.
    pub async fn shutdown(self) -> Result<CatalogSession, CatalogError> {
        info!("Shutting down catalog system");
        drop(self.catalog_client);

        let session = self
            .handle
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))?;

        info!(products = session.products().len(), "Catalog system stopped");
        Ok(session)
    }
}
