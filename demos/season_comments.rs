use dotenvy::dotenv;
use ferrotrakt::{
    model::list::{ListSortType, ListType},
    prelude::*,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let trakt_client =
        TraktClientBuilder::new(std::env::var("TRAKT_CLIENT_ID").expect("Trakt client ID not in environment"))
            .build_async()
            .expect("failed to build Trakt client");

    // walk through every page of comments
    let mut pagination = Some(Pagination::new(1, 10));
    while let Some(current) = pagination {
        let page = trakt_client
            .season_comments("game-of-thrones", 1)
            .pagination(current)
            .send_async()
            .await
            .unwrap();

        println!("Page {} of {:?}", current.page, page.page_count);
        for comment in &page {
            println!("  {} ({} likes): {}", comment.user.username, comment.likes, comment.comment);
        }

        pagination = page.next_pagination();
    }

    let lists = trakt_client
        .lists_containing_season("game-of-thrones", 1)
        .list_type(ListType::All)
        .sort_by(ListSortType::Likes)
        .limit(5)
        .send_async()
        .await
        .unwrap();

    for list in lists {
        println!("{} by {:?}: {} items", list.name, list.user.map(|user| user.username), list.item_count);
    }
}
