pub mod collect;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod renderer;
mod retry;
pub mod score;

pub use collect::{collect_all, ProviderOutcome, ScanOutcome};
pub use error::ScrapeError;
pub use extract::{compile_selectors, extract_candidates, CandidateFields, CompiledSelectors};
pub use normalize::{evaluate, Rejection};
pub use renderer::HttpRenderer;
pub use score::{score_title, AppealScores};
