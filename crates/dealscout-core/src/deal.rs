/// An accepted, scored vacation package offer.
///
/// Constructed once by the scoring step after every filter predicate has
/// passed, and never mutated afterwards. The three appeal scores are derived
/// from `title` alone at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Vendor the listing was scraped from.
    pub provider: String,
    /// Listing name as shown on the vendor page.
    pub title: String,
    /// Per-person package price in whole Canadian dollars.
    pub price_cad: u32,
    /// Departure city text from the listing, or the traveler's home city
    /// when the vendor publishes no per-listing departure.
    pub departure_city: String,
    /// Listing URL; empty when the vendor exposes no per-card link.
    pub link: String,
    /// Party appeal, 1..=10.
    pub party_score: u8,
    /// Food appeal, 1..=10.
    pub food_score: u8,
    /// Drinks appeal, 1..=10.
    pub drinks_score: u8,
}

impl Deal {
    /// Combined ranking key: `party + food + drinks`.
    #[must_use]
    pub fn total_score(&self) -> u16 {
        u16::from(self.party_score) + u16::from(self.food_score) + u16::from(self.drinks_score)
    }
}
