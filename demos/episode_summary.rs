use dotenvy::dotenv;
use ferrotrakt::prelude::*;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let trakt_client =
        TraktClientBuilder::new(std::env::var("TRAKT_CLIENT_ID").expect("Trakt client ID not in environment"))
            // a synchronous (blocking) client may be built with .build_sync() if the "sync" crate feature is enabled
            .build_async()
            .expect("failed to build Trakt client");

    let episode = trakt_client
        .episode_summary("game-of-thrones", 1, 1)
        .extended([ExtendedInfo::Full])
        .send_async()
        .await
        .unwrap();

    println!(
        "S{:02}E{:02} {} ({} min)",
        episode.season,
        episode.number,
        episode.title.as_deref().unwrap_or("TBA"),
        episode.runtime.unwrap_or_default()
    );

    if let Some(overview) = episode.overview {
        println!("{overview}");
    }

    let translations = trakt_client
        .episode_translations("game-of-thrones", 1, 1, Some("es"))
        .send_async()
        .await
        .unwrap();

    for translation in translations {
        println!("[{}] {}", translation.language, translation.title.unwrap_or_default());
    }
}
