//! # Catalog Client
//!
//! High-level API for driving a catalog session actor. It wraps a
//! `SessionClient<CatalogSession>` and exposes one method per user interaction, unpacking
//! each [`CatalogOutcome`] into a plain return value.
use crate::card::ProductCard;
use crate::catalog_actor::{CatalogEvent, CatalogOutcome};
use crate::error::CatalogError;
use crate::model::{Category, ColorToken, DraftChange, Product};
use crate::session::{CatalogSession, SubmitOutcome};
use session_framework::{DomainClient, FrameworkError, SessionClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: SessionClient<CatalogSession>,
}

impl CatalogClient {
    pub fn new(inner: SessionClient<CatalogSession>) -> Self {
        Self { inner }
    }
}

impl DomainClient<CatalogSession> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &SessionClient<CatalogSession> {
        &self.inner
    }

    /// Recovers the session's own [`CatalogError`] when the actor rejected an event;
    /// transport failures become `ActorCommunicationError`.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(outcome: CatalogOutcome) -> CatalogError {
    CatalogError::UnexpectedOutcome(format!("{outcome:?}"))
}

impl CatalogClient {
    #[instrument(skip(self))]
    pub async fn open_form(&self) -> Result<(), CatalogError> {
        match self.dispatch(CatalogEvent::Open).await? {
            CatalogOutcome::Open(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel_form(&self) -> Result<(), CatalogError> {
        match self.dispatch(CatalogEvent::Cancel).await? {
            CatalogOutcome::Cancel(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn change_field(&self, change: DraftChange) -> Result<(), CatalogError> {
        match self.dispatch(CatalogEvent::Change(change)).await? {
            CatalogOutcome::Change(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Returns whether the color is selected after the toggle.
    #[instrument(skip(self))]
    pub async fn toggle_color(&self, token: ColorToken) -> Result<bool, CatalogError> {
        match self.dispatch(CatalogEvent::ToggleColor(token)).await? {
            CatalogOutcome::ToggleColor(selected) => Ok(selected),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_category(&self, name: &str) -> Result<Category, CatalogError> {
        match self
            .dispatch(CatalogEvent::SelectCategory(name.to_string()))
            .await?
        {
            CatalogOutcome::SelectCategory(category) => Ok(category),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, CatalogError> {
        let outcome = match self.dispatch(CatalogEvent::Submit).await? {
            CatalogOutcome::Submit(outcome) => outcome,
            other => return Err(unexpected(other)),
        };
        match &outcome {
            SubmitOutcome::Committed(id) => info!(product_id = %id, "Product added"),
            SubmitOutcome::Rejected(errors) => {
                debug!(fields = ?errors.invalid_fields(), "Draft rejected")
            }
        }
        Ok(outcome)
    }

    /// The committed collection, newest first.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.snapshot().await?.products)
    }

    /// Card view models for the grid, newest first.
    #[instrument(skip(self))]
    pub async fn cards(&self) -> Result<Vec<ProductCard>, CatalogError> {
        let products = self.products().await?;
        Ok(products.iter().map(ProductCard::from).collect())
    }
}
