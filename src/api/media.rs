//! Resources hanging off an edition: ratings, podiums, photos and weather.

use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::{
    Photo, PhotoRequest, Podium, PodiumRequest, Rating, RatingRequest, Weather, WeatherRequest,
};

#[instrument(skip(transport))]
pub(crate) async fn list_ratings(transport: &Transport, edition_id: u32) -> Result<Vec<Rating>> {
    let ratings: Vec<Rating> = transport
        .get(&format!("/editions/{edition_id}/ratings"))
        .await?;
    debug!(count = ratings.len(), edition_id, "fetched ratings");
    Ok(ratings)
}

#[instrument(skip(transport, request))]
pub(crate) async fn create_rating(
    transport: &Transport,
    edition_id: u32,
    request: &RatingRequest,
) -> Result<Rating> {
    transport
        .post(&format!("/editions/{edition_id}/ratings"), request)
        .await
}

#[instrument(skip(transport, request))]
pub(crate) async fn update_rating(
    transport: &Transport,
    rating_id: u32,
    request: &RatingRequest,
) -> Result<Rating> {
    transport.put(&format!("/ratings/{rating_id}"), request).await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_rating(transport: &Transport, rating_id: u32) -> Result<()> {
    transport.delete(&format!("/ratings/{rating_id}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn list_podiums(transport: &Transport, edition_id: u32) -> Result<Vec<Podium>> {
    let podiums: Vec<Podium> = transport
        .get(&format!("/editions/{edition_id}/podiums"))
        .await?;
    debug!(count = podiums.len(), edition_id, "fetched podiums");
    Ok(podiums)
}

#[instrument(skip(transport, request))]
pub(crate) async fn create_podium(
    transport: &Transport,
    edition_id: u32,
    request: &PodiumRequest,
) -> Result<Podium> {
    transport
        .post(&format!("/editions/{edition_id}/podiums"), request)
        .await
}

#[instrument(skip(transport, request))]
pub(crate) async fn update_podium(
    transport: &Transport,
    podium_id: u32,
    request: &PodiumRequest,
) -> Result<Podium> {
    transport.put(&format!("/podiums/{podium_id}"), request).await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_podium(transport: &Transport, podium_id: u32) -> Result<()> {
    transport.delete(&format!("/podiums/{podium_id}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn list_photos(transport: &Transport, edition_id: u32) -> Result<Vec<Photo>> {
    let mut photos: Vec<Photo> = transport
        .get(&format!("/editions/{edition_id}/photos"))
        .await?;
    photos.sort_by_key(|p| (p.position, p.id));
    debug!(count = photos.len(), edition_id, "fetched photos");
    Ok(photos)
}

#[instrument(skip(transport, request))]
pub(crate) async fn create_photo(
    transport: &Transport,
    edition_id: u32,
    request: &PhotoRequest,
) -> Result<Photo> {
    transport
        .post(&format!("/editions/{edition_id}/photos"), request)
        .await
}

#[instrument(skip(transport))]
pub(crate) async fn delete_photo(transport: &Transport, photo_id: u32) -> Result<()> {
    transport.delete(&format!("/photos/{photo_id}")).await
}

#[instrument(skip(transport))]
pub(crate) async fn get_weather(transport: &Transport, edition_id: u32) -> Result<Weather> {
    transport
        .get(&format!("/editions/{edition_id}/weather"))
        .await
}

#[instrument(skip(transport, request))]
pub(crate) async fn put_weather(
    transport: &Transport,
    edition_id: u32,
    request: &WeatherRequest,
) -> Result<Weather> {
    transport
        .put(&format!("/editions/{edition_id}/weather"), request)
        .await
}
