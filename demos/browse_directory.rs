use tracing_subscriber::EnvFilter;

use trail_events::{ClientConfig, EventFilters, EventStatus, PageRequest, TrailClient};

#[tokio::main]
async fn main() -> trail_events::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    let client = TrailClient::from_config(&config)?;

    let filters = EventFilters {
        status: Some(EventStatus::Published),
        ..Default::default()
    };
    let mut page = PageRequest::default();
    loop {
        println!("Getting page {}", page.page);
        let events = match client.list_events(&filters, page).await {
            Ok(events) => events,
            Err(e) => {
                eprintln!("{}", e.user_message());
                return Err(e);
            }
        };

        for event in &events.data {
            println!(
                "{} ({})",
                event.name,
                event.city.as_deref().unwrap_or("unknown city")
            );
            for competition in client.list_competitions(event.id).await? {
                let Some(edition) = client
                    .list_editions(competition.id)
                    .await?
                    .into_iter()
                    .max_by_key(|e| e.year)
                else {
                    continue;
                };
                let resolved = client.resolve_edition(edition.id).await?;
                let distance = resolved
                    .distance
                    .value()
                    .map(|d| format!("{d} km"))
                    .unwrap_or_else(|| "?".to_string());
                let marker = if resolved.distance.is_inherited() {
                    " (from competition)"
                } else {
                    ""
                };
                println!(
                    "  {} {}: {distance}{marker}",
                    competition.name, edition.year
                );
            }
        }

        if !events.has_next() {
            break;
        }
        page.page += 1;
    }

    Ok(())
}
