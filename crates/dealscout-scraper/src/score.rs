//! Resort-brand appeal scorer.
//!
//! Each axis is an ordered rule table evaluated first-match-wins against the
//! lower-cased listing title: a title matching several tiers receives only
//! the first tier's score. Food and drinks share one table and are always
//! equal.

/// One tier of an appeal rule table: the score awarded when the title
/// contains any of the needles.
struct ScoreTier {
    score: u8,
    needles: &'static [&'static str],
}

const PARTY_TIERS: &[ScoreTier] = &[
    ScoreTier {
        score: 9,
        needles: &["breathless", "temptation", "riu", "hard rock", "chic"],
    },
    ScoreTier {
        score: 8,
        needles: &["barcel", "hyatt zilara"],
    },
    ScoreTier {
        score: 7,
        needles: &["secrets", "excellence"],
    },
];
const PARTY_DEFAULT: u8 = 5;

const FOOD_DRINKS_TIERS: &[ScoreTier] = &[
    ScoreTier {
        score: 9,
        needles: &["gourmet", "excellence", "royalton chic", "hyatt"],
    },
    ScoreTier {
        score: 8,
        needles: &["riu", "hard rock"],
    },
];
const FOOD_DRINKS_DEFAULT: u8 = 7;

/// The three appeal ratings of a listing, each in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppealScores {
    pub party: u8,
    pub food: u8,
    pub drinks: u8,
}

/// Scores a listing title. Pure: identical titles always yield identical
/// triples, with no side effects.
#[must_use]
pub fn score_title(title: &str) -> AppealScores {
    let lower = title.to_lowercase();
    let party = tier_score(&lower, PARTY_TIERS, PARTY_DEFAULT);
    let table = tier_score(&lower, FOOD_DRINKS_TIERS, FOOD_DRINKS_DEFAULT);
    AppealScores {
        party,
        food: table,
        drinks: table,
    }
}

fn tier_score(lower_title: &str, tiers: &[ScoreTier], default: u8) -> u8 {
    tiers
        .iter()
        .find(|tier| tier.needles.iter().any(|needle| lower_title.contains(needle)))
        .map_or(default, |tier| tier.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_title_gets_defaults() {
        let scores = score_title("Grand Bahia Principe");
        assert_eq!(
            scores,
            AppealScores {
                party: 5,
                food: 7,
                drinks: 7
            }
        );
    }

    #[test]
    fn breathless_is_top_party_tier() {
        let scores = score_title("Breathless Riviera Cancun Resort");
        assert_eq!(scores.party, 9);
        // No food-tier keyword present: food and drinks stay at the default.
        assert_eq!(scores.food, 7);
        assert_eq!(scores.drinks, 7);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score_title("BREATHLESS PUNTA CANA").party, 9);
        assert_eq!(score_title("hyatt zilara cancun").party, 8);
    }

    #[test]
    fn tier_priority_first_match_wins() {
        // Contains both a tier-1 and a tier-3 party keyword; tier 1 wins.
        let scores = score_title("Breathless at Secrets Bay");
        assert_eq!(scores.party, 9);
    }

    #[test]
    fn riu_scores_both_axes() {
        let scores = score_title("Riu Palace Bavaro");
        assert_eq!(scores.party, 9);
        assert_eq!(scores.food, 8);
        assert_eq!(scores.drinks, 8);
    }

    #[test]
    fn excellence_is_mid_party_top_food() {
        let scores = score_title("Excellence Playa Mujeres");
        assert_eq!(scores.party, 7);
        assert_eq!(scores.food, 9);
        assert_eq!(scores.drinks, 9);
    }

    #[test]
    fn royalton_chic_tops_both_tables() {
        // "chic" satisfies the top party tier; "royalton chic" the top food tier.
        let scores = score_title("Royalton CHIC Punta Cana");
        assert_eq!(
            scores,
            AppealScores {
                party: 9,
                food: 9,
                drinks: 9
            }
        );
    }

    #[test]
    fn hyatt_zilara_party_tier_two_food_tier_one() {
        let scores = score_title("Hyatt Zilara Cancun");
        assert_eq!(scores.party, 8);
        assert_eq!(scores.food, 9);
    }

    #[test]
    fn food_and_drinks_are_always_equal() {
        for title in [
            "Gourmet Marina Resort",
            "Hard Rock Punta Cana",
            "Sunscape Dominican Beach",
        ] {
            let scores = score_title(title);
            assert_eq!(scores.food, scores.drinks, "axes diverged for {title}");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let title = "Temptation Miches Resort";
        assert_eq!(score_title(title), score_title(title));
    }
}
