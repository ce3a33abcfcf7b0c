use crate::{
    client::request_builder::ResponseBody,
    model::{
        activity::LastActivities,
        comment::Comment,
        episode::Episode,
        movie::Movie,
        people::CastAndCrew,
        progress::ShowWatchedProgress,
        rating::RatingDistribution,
        settings::AccountSettings,
        show::Show,
        stats::Stats,
    },
};

pub const EXTENDED_QUERY: &str = "extended";
pub const PAGE_QUERY: &str = "page";
pub const LIMIT_QUERY: &str = "limit";
pub const TRANSLATIONS_QUERY: &str = "translations";
pub const SEARCH_TYPE_QUERY: &str = "type";

pub const PROGRESS_HIDDEN_QUERY: &str = "hidden";
pub const PROGRESS_SPECIALS_QUERY: &str = "specials";
pub const PROGRESS_COUNT_SPECIALS_QUERY: &str = "count_specials";

// ResponseBody already has implementations for (), Vec, Option and serde_json::Value; implement it for every other
// object an endpoint returns directly
impl ResponseBody for Show {}
impl ResponseBody for Episode {}
impl ResponseBody for Movie {}
impl ResponseBody for Comment {}
impl ResponseBody for Stats {}
impl ResponseBody for RatingDistribution {}
impl ResponseBody for CastAndCrew {}
impl ResponseBody for ShowWatchedProgress {}
impl ResponseBody for AccountSettings {}
impl ResponseBody for LastActivities {}
