//! Rule-based engines
//!
//! - `recommend`: team recommendation and team analysis
//! - `lore`: keyword-matched lore Q&A

pub mod lore;
pub mod recommend;

pub use lore::LoreAnswerer;
pub use recommend::{RecommendConfig, TeamAnalysis, TeamRecommendation, TeamRecommender};
