use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::{Competition, CreateCompetitionRequest, UpdateCompetitionRequest};

#[instrument(skip(transport))]
pub(crate) async fn list_competitions(
    transport: &Transport,
    event_id: u32,
) -> Result<Vec<Competition>> {
    let competitions: Vec<Competition> = transport
        .get(&format!("/events/{event_id}/competitions"))
        .await?;
    debug!(count = competitions.len(), event_id, "fetched competitions");
    Ok(competitions)
}

#[instrument(skip(transport))]
pub(crate) async fn get_competition(
    transport: &Transport,
    competition_id: u32,
) -> Result<Competition> {
    transport
        .get(&format!("/competitions/{competition_id}"))
        .await
}

#[instrument(skip(transport, request), fields(slug = %request.slug))]
pub(crate) async fn create_competition(
    transport: &Transport,
    event_id: u32,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    transport
        .post(&format!("/events/{event_id}/competitions"), request)
        .await
}

#[instrument(skip(transport, request))]
pub(crate) async fn update_competition(
    transport: &Transport,
    competition_id: u32,
    request: &UpdateCompetitionRequest,
) -> Result<Competition> {
    transport
        .put(&format!("/competitions/{competition_id}"), request)
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_competition(transport: &Transport, competition_id: u32) -> Result<()> {
    transport
        .delete(&format!("/competitions/{competition_id}"))
        .await
}
