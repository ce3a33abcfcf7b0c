use dotenvy::dotenv;
use ferrotrakt::prelude::*;

fn main() {
    dotenv().ok();
    env_logger::init();

    let trakt_client =
        TraktClientBuilder::new(std::env::var("TRAKT_CLIENT_ID").expect("Trakt client ID not in environment"))
            .access_token(std::env::var("TRAKT_ACCESS_TOKEN").expect("Trakt access token not in environment"))
            .build_sync()
            .expect("failed to build Trakt client");

    let activities = trakt_client.last_activities().send_sync().unwrap();
    println!("Last activity: {}", activities.all);

    let watched = trakt_client
        .watched_shows()
        .extended([ExtendedInfo::NoSeasons])
        .send_sync()
        .unwrap();

    for show in watched {
        let progress = trakt_client
            .show_watched_progress(&show.show.ids)
            .send_sync()
            .unwrap();

        println!(
            "{} ({} plays): {}/{} episodes{}",
            show.show.title,
            show.plays,
            progress.completed,
            progress.aired,
            if progress.is_completed() { ", completed" } else { "" }
        );
    }
}
