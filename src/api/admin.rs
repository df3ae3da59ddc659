use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::{Result, TrailError};
use crate::model::{AdminLogEntry, ApproveRequest, Competition, Event, RejectRequest};

#[instrument(skip(transport))]
pub(crate) async fn pending_events(transport: &Transport) -> Result<Vec<Event>> {
    let events: Vec<Event> = transport.get("/admin/events/pending").await?;
    debug!(count = events.len(), "fetched pending events");
    Ok(events)
}

#[instrument(skip(transport))]
pub(crate) async fn approve_event(transport: &Transport, event_id: u32) -> Result<Event> {
    transport
        .post(
            &format!("/admin/events/{event_id}/approve"),
            &ApproveRequest {},
        )
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn reject_event(
    transport: &Transport,
    event_id: u32,
    reason: Option<String>,
) -> Result<()> {
    transport
        .post_action(
            &format!("/admin/events/{event_id}/reject"),
            &RejectRequest { reason },
        )
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn approve_competition(
    transport: &Transport,
    competition_id: u32,
) -> Result<Competition> {
    transport
        .post(
            &format!("/admin/competitions/{competition_id}/approve"),
            &ApproveRequest {},
        )
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn reject_competition(
    transport: &Transport,
    competition_id: u32,
    reason: Option<String>,
) -> Result<()> {
    transport
        .post_action(
            &format!("/admin/competitions/{competition_id}/reject"),
            &RejectRequest { reason },
        )
        .await
}

/// Admin audit trail. Backends without the endpoint yield an empty list.
#[instrument(skip(transport))]
pub(crate) async fn logs(transport: &Transport) -> Result<Vec<AdminLogEntry>> {
    match transport.get::<Vec<AdminLogEntry>>("/admin/logs").await {
        Ok(entries) => {
            debug!(count = entries.len(), "fetched admin logs");
            Ok(entries)
        }
        Err(TrailError::NotFound { .. })
        | Err(TrailError::Server {
            status: StatusCode::NOT_IMPLEMENTED,
            ..
        }) => {
            debug!("admin logs not available, showing none");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
