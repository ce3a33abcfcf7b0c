use serde::{Deserialize, Serialize};

/// Statistics of a show, season, episode or movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub watchers: u64,
    pub plays: u64,
    pub collectors: u64,
    /// Present for shows and seasons only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_episodes: Option<u64>,
    pub comments: u64,
    pub lists: u64,
    pub votes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_stats_have_no_collected_episodes() {
        let json = r#"{"watchers":30521,"plays":37986,"collectors":12899,"comments":115,"lists":309,"votes":25655}"#;
        let stats: Stats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.collected_episodes, None);
        assert_eq!(serde_json::to_string(&stats).unwrap(), json);
    }
}
