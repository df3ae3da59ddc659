use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::{Result, TrailError};
use crate::model::{
    CreateEventRequest, Event, EventFilters, Page, PageRequest, UpdateEventRequest,
};
use crate::slug::is_valid_slug;

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(flatten)]
    filters: &'a EventFilters,
    #[serde(flatten)]
    page: PageRequest,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckSlugQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_id: Option<u32>,
}

#[derive(Deserialize)]
struct CheckSlugResponse {
    available: bool,
}

#[instrument(skip(transport))]
pub(crate) async fn list_events(
    transport: &Transport,
    filters: &EventFilters,
    page: PageRequest,
) -> Result<Page<Event>> {
    let query = ListQuery { filters, page };
    let events: Page<Event> = transport.get_with_query("/events", &query).await?;
    debug!(
        count = events.data.len(),
        total = events.total,
        "fetched events page"
    );
    Ok(events)
}

#[instrument(skip(transport))]
pub(crate) async fn get_event(transport: &Transport, event_id: u32) -> Result<Event> {
    transport.get(&format!("/events/{event_id}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn get_event_by_slug(transport: &Transport, slug: &str) -> Result<Event> {
    ensure_slug(slug)?;
    transport.get(&format!("/events/slug/{slug}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn check_slug(
    transport: &Transport,
    slug: &str,
    exclude_id: Option<u32>,
) -> Result<bool> {
    ensure_slug(slug)?;
    let response: CheckSlugResponse = transport
        .get_with_query(
            &format!("/events/check-slug/{slug}"),
            &CheckSlugQuery { exclude_id },
        )
        .await?;
    debug!(available = response.available, "checked event slug");
    Ok(response.available)
}

#[instrument(skip(transport))]
pub(crate) async fn my_events(transport: &Transport) -> Result<Vec<Event>> {
    let events: Vec<Event> = transport.get("/events/my-events").await?;
    debug!(count = events.len(), "fetched organizer events");
    Ok(events)
}

#[instrument(skip(transport, request), fields(slug = %request.slug))]
pub(crate) async fn create_event(
    transport: &Transport,
    request: &CreateEventRequest,
) -> Result<Event> {
    transport.post("/events", request).await
}

#[instrument(skip(transport, request))]
pub(crate) async fn update_event(
    transport: &Transport,
    event_id: u32,
    request: &UpdateEventRequest,
) -> Result<Event> {
    transport.put(&format!("/events/{event_id}"), request).await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_event(transport: &Transport, event_id: u32) -> Result<()> {
    transport.delete(&format!("/events/{event_id}")).await
}

/// Slugs are interpolated into paths, so anything else never leaves the client.
fn ensure_slug(slug: &str) -> Result<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(TrailError::InvalidSlug {
            slug: slug.to_owned(),
        })
    }
}
