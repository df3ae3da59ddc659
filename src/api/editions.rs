use tracing::{debug, instrument};

use crate::api::{competitions, events, Transport};
use crate::error::{Result, TrailError};
use crate::model::{CreateEditionRequest, Edition, EditionWithInheritance, UpdateEditionRequest};
use crate::resolve::{resolve_edition, ResolvedEdition};

#[instrument(skip(transport))]
pub(crate) async fn list_editions(
    transport: &Transport,
    competition_id: u32,
) -> Result<Vec<Edition>> {
    let editions: Vec<Edition> = transport
        .get(&format!("/competitions/{competition_id}/editions"))
        .await?;
    debug!(count = editions.len(), competition_id, "fetched editions");
    Ok(editions)
}

#[instrument(skip(transport))]
pub(crate) async fn get_edition(transport: &Transport, edition_id: u32) -> Result<Edition> {
    transport.get(&format!("/editions/{edition_id}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn get_edition_with_inheritance(
    transport: &Transport,
    edition_id: u32,
) -> Result<EditionWithInheritance> {
    transport
        .get(&format!("/editions/{edition_id}/with-inheritance"))
        .await
}

/// Fetch an edition and its parents, then resolve inherited fields locally.
///
/// A parent that answers 404 is reported as a missing parent rather than a
/// plain not-found, since the edition itself exists.
#[instrument(skip(transport))]
pub(crate) async fn resolve(transport: &Transport, edition_id: u32) -> Result<ResolvedEdition> {
    let edition = get_edition(transport, edition_id).await?;

    let competition =
        optional(competitions::get_competition(transport, edition.competition_id).await)?;
    let Some(competition) = competition else {
        return resolve_edition(&edition, None, None);
    };

    let event = optional(events::get_event(transport, competition.event_id).await)?;
    let resolved = resolve_edition(&edition, Some(&competition), event.as_ref())?;
    debug!(
        inherited_distance = resolved.distance.is_inherited(),
        inherited_city = resolved.city.is_inherited(),
        "resolved edition"
    );
    Ok(resolved)
}

fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(TrailError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

#[instrument(skip(transport, request), fields(year = request.year))]
pub(crate) async fn create_edition(
    transport: &Transport,
    competition_id: u32,
    request: &CreateEditionRequest,
) -> Result<Edition> {
    transport
        .post(&format!("/competitions/{competition_id}/editions"), request)
        .await
}

#[instrument(skip(transport, request))]
pub(crate) async fn update_edition(
    transport: &Transport,
    edition_id: u32,
    request: &UpdateEditionRequest,
) -> Result<Edition> {
    transport
        .put(&format!("/editions/{edition_id}"), request)
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_edition(transport: &Transport, edition_id: u32) -> Result<()> {
    transport.delete(&format!("/editions/{edition_id}")).await
}
