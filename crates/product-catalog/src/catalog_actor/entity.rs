//! SessionState trait implementation for the catalog session.
//!
//! Binds [`CatalogSession`] to the generic [`session_framework::SessionActor`]. The id
//! generator is the actor's run context, so it is chosen when the actor is started.

use std::sync::Arc;

use async_trait::async_trait;
use session_framework::SessionState;

use super::events::{CatalogEvent, CatalogOutcome};
use crate::error::CatalogError;
use crate::ids::IdGenerator;
use crate::session::{CatalogSession, CatalogSnapshot};

#[async_trait]
impl SessionState for CatalogSession {
    type Event = CatalogEvent;
    type Outcome = CatalogOutcome;
    type Snapshot = CatalogSnapshot;
    type Context = Arc<dyn IdGenerator>;
    type Error = CatalogError;

    async fn handle_event(
        &mut self,
        event: CatalogEvent,
        ids: &Self::Context,
    ) -> Result<CatalogOutcome, CatalogError> {
        match event {
            CatalogEvent::Open => {
                self.open();
                Ok(CatalogOutcome::Open(()))
            }
            CatalogEvent::Cancel => self.cancel().map(CatalogOutcome::Cancel),
            CatalogEvent::Change(change) => self.change(change).map(CatalogOutcome::Change),
            CatalogEvent::ToggleColor(token) => {
                self.toggle_color(token).map(CatalogOutcome::ToggleColor)
            }
            CatalogEvent::SelectCategory(name) => self
                .select_category(&name)
                .map(|category| CatalogOutcome::SelectCategory(category.clone())),
            CatalogEvent::Submit => self.submit(ids.as_ref()).map(CatalogOutcome::Submit),
        }
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSession::snapshot(self)
    }
}
