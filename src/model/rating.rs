use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The average rating of an item, the number of votes and how the votes are distributed over the ratings 1 to 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub rating: f64,
    pub votes: u64,
    pub distribution: BTreeMap<u8, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_keys_are_ratings() {
        let json = r#"{"rating": 9.12345, "votes": 3,
            "distribution": {"1": 0, "2": 0, "3": 0, "4": 0, "5": 0, "6": 0, "7": 0, "8": 1, "9": 0, "10": 2}}"#;
        let ratings: RatingDistribution = serde_json::from_str(json).unwrap();

        assert_eq!(ratings.distribution.len(), 10);
        assert_eq!(ratings.distribution.get(&10), Some(&2));
        assert_eq!(ratings.distribution.values().sum::<u64>(), ratings.votes);
    }
}
