use club_events::{ApiConfig, ClubClient, LoadedData};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env();
    if config.is_relative() {
        eprintln!("Set PUBLIC_API_URL to the portal's base URL");
        std::process::exit(1);
    }

    let client = ClubClient::new(config);
    let loaded = LoadedData::from_result(client.get_events_data().await);

    match &loaded {
        LoadedData::Success { data } => {
            println!(
                "{} ({}, {})",
                data.name.as_deref().unwrap_or("unknown viewer"),
                data.department.as_deref().unwrap_or("-"),
                data.batch.as_deref().unwrap_or("-")
            );
            for event in &data.events {
                let status = if event.is_registration_full == Some(true) {
                    "full"
                } else if event.reg_open == Some(true) {
                    "open"
                } else {
                    "closed"
                };
                println!(
                    "  #{} {} @ {} on {} [{status}]",
                    event.id,
                    event.name.as_deref().unwrap_or_default(),
                    event.venue.as_deref().unwrap_or("TBA"),
                    event.event_start_date.as_deref().unwrap_or("TBA")
                );
            }
        }
        _ => {
            eprintln!("{}", loaded.message().unwrap_or_default());
            std::process::exit(1);
        }
    }
}
