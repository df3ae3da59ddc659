use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use validator::Validate;

use crate::api::{self, Transport};
use crate::config::ClientConfig;
use crate::error::{Result, TrailError};
use crate::model::*;
use crate::resolve::ResolvedEdition;
use crate::session::{FileTokenStore, Session};
use crate::slug::{SlugAvailability, SlugChecker, DEFAULT_DEBOUNCE};

/// The main entry point for talking to the trail-running directory API.
///
/// `TrailClient` wraps a [`reqwest::Client`] and a [`Session`], and exposes
/// one method per backend operation. Payloads are validated before they are
/// sent; a validation failure never reaches the network.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> trail_events::Result<()> {
/// use trail_events::{EventFilters, PageRequest, TrailClient};
///
/// let client = TrailClient::new("http://localhost:3000/api");
/// let events = client
///     .list_events(&EventFilters::default(), PageRequest::default())
///     .await?;
/// println!("Found {} events", events.total);
/// # Ok(())
/// # }
/// ```
pub struct TrailClient {
    transport: Transport,
    slug_debounce: Duration,
}

impl TrailClient {
    /// Create a client with default HTTP settings and an anonymous session.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport: Transport {
                http: client,
                base_url: base_url.trim_end_matches('/').to_string(),
                session: Session::anonymous(),
            },
            slug_debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Build a client from configuration, restoring the persisted session if any.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TrailError::Config(format!("cannot build http client: {e}")))?;

        let session = match &config.token_file {
            Some(path) => Session::load(FileTokenStore::new(path))?,
            None => Session::anonymous(),
        };
        if session.language() != config.language {
            session.set_language(config.language)?;
        }

        let mut client = Self::with_client(http, config.base_url.clone()).with_session(session);
        client.slug_debounce = config.slug_debounce;
        Ok(client)
    }

    /// Use `session` for every request made by this client.
    pub fn with_session(mut self, session: Session) -> Self {
        self.transport.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.transport.session
    }

    /// A debounced checker for event slugs, bound to this client.
    pub fn event_slug_checker(self: &Arc<Self>) -> SlugChecker<Self> {
        SlugChecker::new(Arc::clone(self)).with_debounce(self.slug_debounce)
    }

    // Events

    /// Fetch a page of events matching `filters`.
    pub async fn list_events(
        &self,
        filters: &EventFilters,
        page: PageRequest,
    ) -> Result<Page<Event>> {
        api::events::list_events(&self.transport, filters, page).await
    }

    pub async fn get_event(&self, event_id: u32) -> Result<Event> {
        api::events::get_event(&self.transport, event_id).await
    }

    pub async fn get_event_by_slug(&self, slug: &str) -> Result<Event> {
        api::events::get_event_by_slug(&self.transport, slug).await
    }

    /// Ask once, without debouncing, whether an event slug is free.
    pub async fn check_event_slug(&self, slug: &str, exclude_id: Option<u32>) -> Result<bool> {
        api::events::check_slug(&self.transport, slug, exclude_id).await
    }

    /// Events owned by the signed-in organizer.
    pub async fn my_events(&self) -> Result<Vec<Event>> {
        api::events::my_events(&self.transport).await
    }

    /// Create an event. Without an explicit status it starts as a draft, or
    /// published when the session belongs to an admin.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        request.validate()?;
        let mut request = request.clone();
        request
            .status
            .get_or_insert_with(|| EventStatus::initial_for(self.session().role()));
        api::events::create_event(&self.transport, &request).await
    }

    pub async fn update_event(&self, event_id: u32, request: &UpdateEventRequest) -> Result<Event> {
        request.validate()?;
        api::events::update_event(&self.transport, event_id, request).await
    }

    pub async fn delete_event(&self, event_id: u32) -> Result<()> {
        api::events::delete_event(&self.transport, event_id).await
    }

    // Competitions

    pub async fn list_competitions(&self, event_id: u32) -> Result<Vec<Competition>> {
        api::competitions::list_competitions(&self.transport, event_id).await
    }

    pub async fn get_competition(&self, competition_id: u32) -> Result<Competition> {
        api::competitions::get_competition(&self.transport, competition_id).await
    }

    pub async fn create_competition(
        &self,
        event_id: u32,
        request: &CreateCompetitionRequest,
    ) -> Result<Competition> {
        request.validate()?;
        api::competitions::create_competition(&self.transport, event_id, request).await
    }

    pub async fn update_competition(
        &self,
        competition_id: u32,
        request: &UpdateCompetitionRequest,
    ) -> Result<Competition> {
        request.validate()?;
        request.validate_bases()?;
        api::competitions::update_competition(&self.transport, competition_id, request).await
    }

    pub async fn delete_competition(&self, competition_id: u32) -> Result<()> {
        api::competitions::delete_competition(&self.transport, competition_id).await
    }

    // Editions

    pub async fn list_editions(&self, competition_id: u32) -> Result<Vec<Edition>> {
        api::editions::list_editions(&self.transport, competition_id).await
    }

    pub async fn get_edition(&self, edition_id: u32) -> Result<Edition> {
        api::editions::get_edition(&self.transport, edition_id).await
    }

    /// Fetch an edition with the backend's resolution of inherited fields.
    pub async fn get_edition_with_inheritance(
        &self,
        edition_id: u32,
    ) -> Result<EditionWithInheritance> {
        api::editions::get_edition_with_inheritance(&self.transport, edition_id).await
    }

    /// Fetch an edition and its parents and resolve inherited fields with provenance.
    pub async fn resolve_edition(&self, edition_id: u32) -> Result<ResolvedEdition> {
        api::editions::resolve(&self.transport, edition_id).await
    }

    pub async fn create_edition(
        &self,
        competition_id: u32,
        request: &CreateEditionRequest,
    ) -> Result<Edition> {
        request.validate()?;
        request.validate_dates()?;
        api::editions::create_edition(&self.transport, competition_id, request).await
    }

    pub async fn update_edition(
        &self,
        edition_id: u32,
        request: &UpdateEditionRequest,
    ) -> Result<Edition> {
        request.validate()?;
        request.validate_overrides()?;
        api::editions::update_edition(&self.transport, edition_id, request).await
    }

    pub async fn delete_edition(&self, edition_id: u32) -> Result<()> {
        api::editions::delete_edition(&self.transport, edition_id).await
    }

    // Ratings, podiums, photos, weather

    pub async fn list_ratings(&self, edition_id: u32) -> Result<Vec<Rating>> {
        api::media::list_ratings(&self.transport, edition_id).await
    }

    pub async fn create_rating(&self, edition_id: u32, request: &RatingRequest) -> Result<Rating> {
        request.validate()?;
        api::media::create_rating(&self.transport, edition_id, request).await
    }

    pub async fn update_rating(&self, rating_id: u32, request: &RatingRequest) -> Result<Rating> {
        request.validate()?;
        api::media::update_rating(&self.transport, rating_id, request).await
    }

    pub async fn delete_rating(&self, rating_id: u32) -> Result<()> {
        api::media::delete_rating(&self.transport, rating_id).await
    }

    pub async fn list_podiums(&self, edition_id: u32) -> Result<Vec<Podium>> {
        api::media::list_podiums(&self.transport, edition_id).await
    }

    pub async fn create_podium(&self, edition_id: u32, request: &PodiumRequest) -> Result<Podium> {
        request.validate()?;
        api::media::create_podium(&self.transport, edition_id, request).await
    }

    pub async fn update_podium(&self, podium_id: u32, request: &PodiumRequest) -> Result<Podium> {
        request.validate()?;
        api::media::update_podium(&self.transport, podium_id, request).await
    }

    pub async fn delete_podium(&self, podium_id: u32) -> Result<()> {
        api::media::delete_podium(&self.transport, podium_id).await
    }

    /// Photos of an edition in gallery order.
    pub async fn list_photos(&self, edition_id: u32) -> Result<Vec<Photo>> {
        api::media::list_photos(&self.transport, edition_id).await
    }

    /// Register an already-hosted photo on an edition.
    pub async fn create_photo(&self, edition_id: u32, request: &PhotoRequest) -> Result<Photo> {
        request.validate()?;
        api::media::create_photo(&self.transport, edition_id, request).await
    }

    pub async fn delete_photo(&self, photo_id: u32) -> Result<()> {
        api::media::delete_photo(&self.transport, photo_id).await
    }

    pub async fn get_weather(&self, edition_id: u32) -> Result<Weather> {
        api::media::get_weather(&self.transport, edition_id).await
    }

    pub async fn put_weather(&self, edition_id: u32, request: &WeatherRequest) -> Result<Weather> {
        request.validate()?;
        api::media::put_weather(&self.transport, edition_id, request).await
    }

    // Admin approval

    /// Events submitted by organizers and waiting for review.
    pub async fn pending_events(&self) -> Result<Vec<Event>> {
        api::admin::pending_events(&self.transport).await
    }

    pub async fn approve_event(&self, event_id: u32) -> Result<Event> {
        api::admin::approve_event(&self.transport, event_id).await
    }

    pub async fn reject_event(&self, event_id: u32, reason: Option<String>) -> Result<()> {
        api::admin::reject_event(&self.transport, event_id, reason).await
    }

    pub async fn approve_competition(&self, competition_id: u32) -> Result<Competition> {
        api::admin::approve_competition(&self.transport, competition_id).await
    }

    pub async fn reject_competition(
        &self,
        competition_id: u32,
        reason: Option<String>,
    ) -> Result<()> {
        api::admin::reject_competition(&self.transport, competition_id, reason).await
    }

    /// Admin audit trail; empty when the backend does not provide one.
    pub async fn admin_logs(&self) -> Result<Vec<AdminLogEntry>> {
        api::admin::logs(&self.transport).await
    }
}

#[async_trait]
impl SlugAvailability for TrailClient {
    async fn is_slug_available(&self, slug: &str, exclude_id: Option<u32>) -> Result<bool> {
        self.check_event_slug(slug, exclude_id).await
    }
}

impl std::fmt::Debug for TrailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrailClient")
            .field("base_url", &self.transport.base_url)
            .field("session", &self.transport.session)
            .finish()
    }
}
