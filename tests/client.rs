//! HTTP behaviour of `TrailClient` against a mocked backend.

use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;
use chrono::NaiveDate;
use trail_events::{
    ClientConfig, CompetitionType, CreateCompetitionRequest, CreateEditionRequest,
    CreateEventRequest, EventFilters, EventStatus, Language, PageRequest, PhotoRequest,
    PodiumCategory, PodiumRequest, RatingRequest, Resolved, Session, SlugCheckState, TrailClient,
    TrailError, UpdateCompetitionRequest, UpdateEditionRequest, UserRole, WeatherRequest,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn client(server: &Server) -> TrailClient {
    TrailClient::new(server.url())
}

fn signed_in(server: &Server, role: UserRole) -> TrailClient {
    let session = Session::anonymous();
    session.sign_in("test-token", role).unwrap();
    TrailClient::new(server.url()).with_session(session)
}

fn event_json(id: u32, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "UTMB Mont-Blanc",
        "slug": "utmb-mont-blanc",
        "city": city,
        "country": "FR",
        "status": "PUBLISHED"
    })
}

fn competition_json(id: u32, event_id: u32) -> serde_json::Value {
    json!({
        "id": id,
        "eventId": event_id,
        "name": "UTMB 171K",
        "slug": "utmb-171k",
        "type": "ULTRA"
    })
}

fn edition_json(id: u32, competition_id: u32) -> serde_json::Value {
    json!({
        "id": id,
        "competitionId": competition_id,
        "year": 2025,
        "startDate": "2025-08-29"
    })
}

/// A mock answering `response` only when the request body equals `body`.
async fn mock_with_body(
    server: &mut Server,
    method: &str,
    path: &str,
    body: serde_json::Value,
    response: serde_json::Value,
) -> mockito::Mock {
    server
        .mock(method, path)
        .match_body(Matcher::Json(body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await
}

async fn mock_get(server: &mut Server, path: &str, response: serde_json::Value) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .create_async()
        .await
}

async fn mock_delete(server: &mut Server, path: &str) -> mockito::Mock {
    server
        .mock("DELETE", path)
        .match_header("authorization", "Bearer test-token")
        .with_status(204)
        .create_async()
        .await
}

fn create_request() -> CreateEventRequest {
    CreateEventRequest {
        name: "Grand Raid".into(),
        slug: "grand-raid".into(),
        city: "Cilaos".into(),
        country: "FR".into(),
        ..Default::default()
    }
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_list_events_sends_filters_and_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "FR".into()),
            Matcher::UrlEncoded("status".into(), "PUBLISHED".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [event_json(1, "Chamonix")],
                "total": 11,
                "page": 2,
                "limit": 10
            })
            .to_string(),
        )
        .create_async()
        .await;

    let filters = EventFilters {
        country: Some("FR".into()),
        status: Some(EventStatus::Published),
        ..Default::default()
    };
    let page = client(&server)
        .list_events(&filters, PageRequest { page: 2, limit: 10 })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_requests_carry_token_and_language() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events/7")
        .match_header("authorization", "Bearer test-token")
        .match_header("accept-language", "en")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(event_json(7, "Chamonix").to_string())
        .create_async()
        .await;

    let client = signed_in(&server, UserRole::Organizer);
    client.session().set_language(Language::En).unwrap();
    let event = client.get_event(7).await.unwrap();

    mock.assert_async().await;
    assert_eq!(event.id, 7);
}

#[tokio::test]
async fn test_anonymous_requests_have_no_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events/slug/utmb-mont-blanc")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(event_json(7, "Chamonix").to_string())
        .create_async()
        .await;

    let event = client(&server)
        .get_event_by_slug("utmb-mont-blanc")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(event.slug, "utmb-mont-blanc");
}

#[tokio::test]
async fn test_unauthorized_clears_session() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/events/my-events")
        .with_status(401)
        .create_async()
        .await;

    let client = signed_in(&server, UserRole::Organizer);
    let err = client.my_events().await.unwrap_err();

    assert!(matches!(err, TrailError::Unauthorized { .. }));
    assert!(err.is_session_invalidating());
    assert!(!client.session().is_authenticated());
    assert_eq!(client.session().role(), None);
}

#[tokio::test]
async fn test_status_classes_map_to_errors() {
    let mut server = Server::new_async().await;
    let _forbidden = server
        .mock("DELETE", "/events/1")
        .with_status(403)
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/events/2")
        .with_status(404)
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/events/3")
        .with_status(502)
        .create_async()
        .await;

    let client = signed_in(&server, UserRole::Organizer);

    assert!(matches!(
        client.delete_event(1).await,
        Err(TrailError::Forbidden { .. })
    ));
    assert!(matches!(
        client.get_event(2).await,
        Err(TrailError::NotFound { .. })
    ));
    let err = client.get_event(3).await.unwrap_err();
    assert!(matches!(err, TrailError::Server { .. }));
    assert!(!err.user_message().is_empty());
    // non-401 failures keep the session
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_statuses_without_error_body_are_unexpected() {
    let mut server = Server::new_async().await;
    let _throttled = server
        .mock("GET", "/events/5")
        .with_status(429)
        .create_async()
        .await;
    let _wrong_method = server
        .mock("DELETE", "/events/6")
        .with_status(405)
        .create_async()
        .await;

    let client = signed_in(&server, UserRole::Organizer);

    let err = client.get_event(5).await.unwrap_err();
    assert!(matches!(err, TrailError::UnexpectedStatus { .. }));
    assert!(err.field_errors().is_none());
    assert!(matches!(
        client.delete_event(6).await,
        Err(TrailError::UnexpectedStatus { .. })
    ));
}

#[tokio::test]
async fn test_backend_validation_errors_are_surfaced() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/events")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(json!({"errors": {"slug": ["Slug already taken"]}}).to_string())
        .create_async()
        .await;

    let err = signed_in(&server, UserRole::Organizer)
        .create_event(&create_request())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Slug already taken");
    assert_eq!(
        err.field_errors().unwrap()["slug"],
        vec!["Slug already taken".to_string()]
    );
}

#[tokio::test]
async fn test_invalid_payload_never_leaves_the_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/events")
        .expect(0)
        .create_async()
        .await;

    let mut request = create_request();
    request.name = "GR".into();
    let err = signed_in(&server, UserRole::Organizer)
        .create_event(&request)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.field_errors().unwrap().contains_key("name"));
}

#[tokio::test]
async fn test_created_event_status_follows_role() {
    let mut server = Server::new_async().await;
    let admin_mock = server
        .mock("POST", "/events")
        .match_body(Matcher::PartialJson(
            json!({"slug": "grand-raid", "status": "PUBLISHED"}),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(event_json(9, "Cilaos").to_string())
        .create_async()
        .await;

    signed_in(&server, UserRole::Admin)
        .create_event(&create_request())
        .await
        .unwrap();
    admin_mock.assert_async().await;

    let organizer_mock = server
        .mock("POST", "/events")
        .match_body(Matcher::PartialJson(json!({"status": "DRAFT"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(event_json(10, "Cilaos").to_string())
        .create_async()
        .await;

    signed_in(&server, UserRole::Organizer)
        .create_event(&create_request())
        .await
        .unwrap();
    organizer_mock.assert_async().await;
}

// ============================================================================
// Competitions & editions
// ============================================================================

#[tokio::test]
async fn test_competition_crud_paths() {
    let mut server = Server::new_async().await;
    let list = mock_get(
        &mut server,
        "/events/1/competitions",
        json!([competition_json(10, 1), competition_json(11, 1)]),
    )
    .await;
    let get = mock_get(&mut server, "/competitions/10", competition_json(10, 1)).await;
    let create = server
        .mock("POST", "/events/1/competitions")
        .match_body(Matcher::PartialJson(json!({
            "name": "UTMB 171K",
            "slug": "utmb-171k",
            "type": "ULTRA",
            "baseDistance": 171.5
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(competition_json(12, 1).to_string())
        .create_async()
        .await;
    let update = mock_with_body(
        &mut server,
        "PUT",
        "/competitions/10",
        json!({"baseMaxParticipants": null}),
        competition_json(10, 1),
    )
    .await;
    let delete = mock_delete(&mut server, "/competitions/10").await;

    let client = signed_in(&server, UserRole::Organizer);

    assert_eq!(client.list_competitions(1).await.unwrap().len(), 2);
    assert_eq!(client.get_competition(10).await.unwrap().event_id, 1);
    let created = client
        .create_competition(
            1,
            &CreateCompetitionRequest {
                name: "UTMB 171K".into(),
                slug: "utmb-171k".into(),
                competition_type: CompetitionType::Ultra,
                base_distance: Some(171.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 12);
    client
        .update_competition(
            10,
            &UpdateCompetitionRequest {
                base_max_participants: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client.delete_competition(10).await.unwrap();

    for mock in [list, get, create, update, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_edition_crud_paths() {
    let mut server = Server::new_async().await;
    let list = mock_get(
        &mut server,
        "/competitions/10/editions",
        json!([edition_json(100, 10)]),
    )
    .await;
    let get = mock_get(&mut server, "/editions/100", edition_json(100, 10)).await;
    let create = mock_with_body(
        &mut server,
        "POST",
        "/competitions/10/editions",
        json!({"year": 2026, "startDate": "2026-08-28", "endDate": "2026-08-30"}),
        edition_json(101, 10),
    )
    .await;
    let update = mock_with_body(
        &mut server,
        "PUT",
        "/editions/100",
        json!({"distance": null, "city": "Courmayeur"}),
        edition_json(100, 10),
    )
    .await;
    let delete = mock_delete(&mut server, "/editions/100").await;

    let client = signed_in(&server, UserRole::Organizer);

    assert_eq!(client.list_editions(10).await.unwrap()[0].id, 100);
    assert_eq!(client.get_edition(100).await.unwrap().year, 2025);
    let created = client
        .create_edition(
            10,
            &CreateEditionRequest {
                year: 2026,
                start_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 8, 30),
                distance: None,
                elevation: None,
                max_participants: None,
                city: None,
                status: None,
                registration_status: None,
                registration_url: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 101);
    client
        .update_edition(
            100,
            &UpdateEditionRequest {
                distance: Some(None),
                city: Some(Some("Courmayeur".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client.delete_edition(100).await.unwrap();

    for mock in [list, get, create, update, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_out_of_range_edition_override_never_leaves_the_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/editions/100")
        .expect(0)
        .create_async()
        .await;

    let client = signed_in(&server, UserRole::Organizer);
    let empty_city = client
        .update_edition(
            100,
            &UpdateEditionRequest {
                city: Some(Some(String::new())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let huge_elevation = client
        .update_edition(
            100,
            &UpdateEditionRequest {
                elevation: Some(Some(999_999)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(empty_city.field_errors().unwrap().contains_key("city"));
    assert!(huge_elevation.field_errors().unwrap().contains_key("elevation"));
}

// ============================================================================
// Ratings, podiums, photos, weather
// ============================================================================

#[tokio::test]
async fn test_rating_endpoints() {
    let mut server = Server::new_async().await;
    let rating = json!({"id": 5, "editionId": 100, "score": 4, "comment": "Superbe"});
    let list = mock_get(&mut server, "/editions/100/ratings", json!([rating.clone()])).await;
    let create = mock_with_body(
        &mut server,
        "POST",
        "/editions/100/ratings",
        json!({"score": 4, "comment": "Superbe"}),
        rating.clone(),
    )
    .await;
    let update = mock_with_body(
        &mut server,
        "PUT",
        "/ratings/5",
        json!({"score": 5, "sceneryScore": 5}),
        rating,
    )
    .await;
    let delete = mock_delete(&mut server, "/ratings/5").await;

    let client = signed_in(&server, UserRole::User);

    assert_eq!(client.list_ratings(100).await.unwrap()[0].score, 4);
    client
        .create_rating(
            100,
            &RatingRequest {
                score: 4,
                comment: Some("Superbe".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client
        .update_rating(
            5,
            &RatingRequest {
                score: 5,
                scenery_score: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client.delete_rating(5).await.unwrap();

    for mock in [list, create, update, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_podium_endpoints() {
    let mut server = Server::new_async().await;
    let podium = json!({
        "id": 8,
        "editionId": 100,
        "category": "WOMEN",
        "position": 1,
        "runnerName": "Courtney Dauwalter",
        "finishTime": "23:29:14"
    });
    let list = mock_get(&mut server, "/editions/100/podiums", json!([podium.clone()])).await;
    let create = mock_with_body(
        &mut server,
        "POST",
        "/editions/100/podiums",
        json!({
            "category": "WOMEN",
            "position": 1,
            "runnerName": "Courtney Dauwalter",
            "finishTime": "23:29:14"
        }),
        podium.clone(),
    )
    .await;
    let update = mock_with_body(
        &mut server,
        "PUT",
        "/podiums/8",
        json!({"category": "WOMEN", "position": 2, "runnerName": "Courtney Dauwalter"}),
        podium,
    )
    .await;
    let delete = mock_delete(&mut server, "/podiums/8").await;

    let client = signed_in(&server, UserRole::Organizer);
    let request = |position: u8, finish_time: Option<&str>| PodiumRequest {
        category: PodiumCategory::Women,
        position,
        runner_name: "Courtney Dauwalter".into(),
        finish_time: finish_time.map(str::to_string),
        club: None,
        nationality: None,
    };

    let podiums = client.list_podiums(100).await.unwrap();
    assert_eq!(podiums[0].category, PodiumCategory::Women);
    client
        .create_podium(100, &request(1, Some("23:29:14")))
        .await
        .unwrap();
    client.update_podium(8, &request(2, None)).await.unwrap();
    client.delete_podium(8).await.unwrap();

    for mock in [list, create, update, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_photo_endpoints() {
    let mut server = Server::new_async().await;
    let list = mock_get(
        &mut server,
        "/editions/100/photos",
        json!([
            {"id": 3, "editionId": 100, "url": "https://cdn.example.org/c.jpg", "position": 2},
            {"id": 2, "editionId": 100, "url": "https://cdn.example.org/b.jpg", "position": 1},
            {"id": 1, "editionId": 100, "url": "https://cdn.example.org/a.jpg", "position": 2}
        ]),
    )
    .await;
    let create = mock_with_body(
        &mut server,
        "POST",
        "/editions/100/photos",
        json!({"url": "https://cdn.example.org/d.jpg", "caption": "Col du Bonhomme"}),
        json!({"id": 4, "editionId": 100, "url": "https://cdn.example.org/d.jpg"}),
    )
    .await;
    let delete = mock_delete(&mut server, "/photos/4").await;

    let client = signed_in(&server, UserRole::Organizer);

    let ids: Vec<u32> = client
        .list_photos(100)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);
    let photo = client
        .create_photo(
            100,
            &PhotoRequest {
                url: "https://cdn.example.org/d.jpg".into(),
                caption: Some("Col du Bonhomme".into()),
                photographer: None,
                position: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(photo.id, 4);
    client.delete_photo(4).await.unwrap();

    for mock in [list, create, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_weather_endpoints() {
    let mut server = Server::new_async().await;
    let weather = json!({
        "editionId": 100,
        "temperatureMin": -2.5,
        "temperatureMax": 24.0,
        "conditions": "Orages en soirée"
    });
    let get = mock_get(&mut server, "/editions/100/weather", weather.clone()).await;
    let put = mock_with_body(
        &mut server,
        "PUT",
        "/editions/100/weather",
        json!({"temperatureMin": -2.5, "temperatureMax": 24.0}),
        weather,
    )
    .await;

    let client = signed_in(&server, UserRole::Organizer);

    let current = client.get_weather(100).await.unwrap();
    assert_eq!(current.temperature_min, Some(-2.5));
    client
        .put_weather(
            100,
            &WeatherRequest {
                temperature_min: Some(-2.5),
                temperature_max: Some(24.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    get.assert_async().await;
    put.assert_async().await;
}

// ============================================================================
// Slug checks
// ============================================================================

#[tokio::test]
async fn test_check_slug_sends_exclude_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events/check-slug/utmb-mont-blanc")
        .match_query(Matcher::UrlEncoded("excludeId".into(), "7".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"available": true}).to_string())
        .create_async()
        .await;

    let available = client(&server)
        .check_event_slug("utmb-mont-blanc", Some(7))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(available);
}

#[tokio::test]
async fn test_malformed_slug_is_rejected_locally() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("^/events/".into()))
        .expect(0)
        .create_async()
        .await;

    let client = client(&server);
    assert!(matches!(
        client.check_event_slug("ab", None).await,
        Err(TrailError::InvalidSlug { .. })
    ));
    assert!(matches!(
        client.get_event_by_slug("Invalid Slug!").await,
        Err(TrailError::InvalidSlug { .. })
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_slug_checker_against_backend() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/events/check-slug/utmb-mont-blanc")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"available": false}).to_string())
        .create_async()
        .await;

    let config = ClientConfig {
        base_url: server.url(),
        slug_debounce: Duration::from_millis(10),
        ..Default::default()
    };
    let client = Arc::new(TrailClient::from_config(&config).unwrap());
    let checker = client.event_slug_checker();

    checker.check("utmb-mont-blanc");
    let mut rx = checker.subscribe();
    let state = rx.wait_for(|s| !s.is_checking()).await.unwrap().clone();

    assert_eq!(state, SlugCheckState::Taken);
    assert_eq!(state.available(), Some(false));
}

// ============================================================================
// Inheritance
// ============================================================================

async fn mock_edition_chain(server: &mut Server) -> (mockito::Mock, mockito::Mock) {
    let edition = server
        .mock("GET", "/editions/100")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 100,
                "competitionId": 10,
                "year": 2025,
                "startDate": "2025-08-29",
                "distance": null,
                "elevation": 50,
                "maxParticipants": null,
                "city": null
            })
            .to_string(),
        )
        .create_async()
        .await;
    let competition = server
        .mock("GET", "/competitions/10")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 10,
                "eventId": 1,
                "name": "UTMB 171K",
                "slug": "utmb-171k",
                "type": "ULTRA",
                "baseDistance": 100.0,
                "baseElevation": 200,
                "baseMaxParticipants": 500
            })
            .to_string(),
        )
        .create_async()
        .await;
    (edition, competition)
}

#[tokio::test]
async fn test_resolve_edition_walks_the_hierarchy() {
    let mut server = Server::new_async().await;
    let _chain = mock_edition_chain(&mut server).await;
    let _event = server
        .mock("GET", "/events/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(event_json(1, "Chamonix").to_string())
        .create_async()
        .await;

    let resolved = client(&server).resolve_edition(100).await.unwrap();

    assert_eq!(resolved.distance, Resolved::Inherited(100.0));
    assert_eq!(resolved.elevation, Resolved::Own(50));
    assert_eq!(resolved.max_participants, Resolved::Inherited(500));
    assert_eq!(resolved.city, Resolved::Inherited("Chamonix".to_string()));
}

#[tokio::test]
async fn test_resolve_edition_with_missing_event() {
    let mut server = Server::new_async().await;
    let _chain = mock_edition_chain(&mut server).await;
    let _event = server
        .mock("GET", "/events/1")
        .with_status(404)
        .create_async()
        .await;

    let err = client(&server).resolve_edition(100).await.unwrap_err();

    assert!(matches!(
        err,
        TrailError::MissingParent {
            parent: "event",
            ..
        }
    ));
}

#[tokio::test]
async fn test_resolve_edition_with_missing_competition() {
    let mut server = Server::new_async().await;
    let _edition = mock_get(&mut server, "/editions/100", edition_json(100, 10)).await;
    let _competition = server
        .mock("GET", "/competitions/10")
        .with_status(404)
        .create_async()
        .await;
    let events = server
        .mock("GET", Matcher::Regex("^/events/".into()))
        .expect(0)
        .create_async()
        .await;

    let err = client(&server).resolve_edition(100).await.unwrap_err();

    events.assert_async().await;
    assert!(matches!(
        err,
        TrailError::MissingParent {
            entity: "edition",
            id: 100,
            parent: "competition",
        }
    ));
}

#[tokio::test]
async fn test_with_inheritance_endpoint() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/editions/100/with-inheritance")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 100,
                "competitionId": 10,
                "year": 2025,
                "startDate": "2025-08-29",
                "resolvedDistance": 100.0,
                "resolvedElevation": 50,
                "resolvedCity": "Chamonix"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let view = client(&server)
        .get_edition_with_inheritance(100)
        .await
        .unwrap();

    assert_eq!(view.edition.id, 100);
    assert_eq!(view.resolved_distance, Some(100.0));
    assert_eq!(view.resolved_max_participants, None);
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_logs_degrade_to_empty() {
    let mut server = Server::new_async().await;
    let client = signed_in(&server, UserRole::Admin);

    let missing = server
        .mock("GET", "/admin/logs")
        .with_status(404)
        .create_async()
        .await;
    assert!(client.admin_logs().await.unwrap().is_empty());
    missing.remove_async().await;

    let unimplemented = server
        .mock("GET", "/admin/logs")
        .with_status(501)
        .create_async()
        .await;
    assert!(client.admin_logs().await.unwrap().is_empty());
    unimplemented.remove_async().await;

    let _broken = server
        .mock("GET", "/admin/logs")
        .with_status(500)
        .create_async()
        .await;
    assert!(matches!(
        client.admin_logs().await,
        Err(TrailError::Server { .. })
    ));
}

#[tokio::test]
async fn test_reject_event_sends_reason() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/admin/events/4/reject")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(json!({"reason": "Duplicate of event 3"})))
        .with_status(204)
        .create_async()
        .await;

    signed_in(&server, UserRole::Admin)
        .reject_event(4, Some("Duplicate of event 3".into()))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_approve_sends_empty_object() {
    let mut server = Server::new_async().await;
    let event = server
        .mock("POST", "/admin/events/4/approve")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(event_json(4, "Chamonix").to_string())
        .create_async()
        .await;
    let competition = mock_with_body(
        &mut server,
        "POST",
        "/admin/competitions/10/approve",
        json!({}),
        competition_json(10, 4),
    )
    .await;

    let client = signed_in(&server, UserRole::Admin);
    assert_eq!(client.approve_event(4).await.unwrap().id, 4);
    assert_eq!(client.approve_competition(10).await.unwrap().id, 10);

    event.assert_async().await;
    competition.assert_async().await;
}

#[tokio::test]
async fn test_reject_competition_without_reason() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/admin/competitions/10/reject")
        .match_body(Matcher::Json(json!({})))
        .with_status(204)
        .create_async()
        .await;

    signed_in(&server, UserRole::Admin)
        .reject_competition(10, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_pending_events() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/events/pending")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([event_json(12, "Cilaos")]).to_string())
        .create_async()
        .await;

    let pending = signed_in(&server, UserRole::Admin)
        .pending_events()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 12);
}
