//! Moonlore Domain Library
//!
//! Core domain types and logic for the Moonlore fan-content backend
//! (Lobotomy Corporation / Library of Ruina / Limbus Company).
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and value objects
//!   - `entities/`: Catalog records (Sinner, Identity, Ego, Abnormality, ...)
//!   - `value_objects/`: Immutable value types (Tier, Sin, Grade, Locale, ...)
//!   - `errors/`: Domain-specific error types
//!
//! - **Catalog** (`catalog/`): The immutable in-memory roster and lore tables,
//!   built once at process start
//!
//! - **Services** (`services/`): Rule-based engines
//!   - `recommend`: team recommendation and team analysis
//!   - `lore`: keyword-matched lore Q&A
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `auth`: external authentication provider
//!
//! # Usage
//!
//! ```rust,ignore
//! use moonlore::{Catalog, TeamRecommender, Scenario};
//!
//! let catalog = Catalog::new();
//! let recommender = TeamRecommender::new(None);
//! let rec = recommender.recommend(&catalog, &owned, Scenario::General);
//! ```

pub mod catalog;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use catalog::Catalog;
pub use domain::{
    Abnormality, AttackType, AuthSession, AuthUser, DamageType, DomainError, Ego, FactionTier,
    GiftBuild, Grade, Identity, Locale, LocalizedText, LoreCharacter, LoreEvent, LoreFaction,
    MirrorFloor, Scenario, Sephirah, SignUpOutcome, Sin, Sinner, SpoilerLevel, Tier, WorkAffinity,
    WorkPreference,
};
pub use ports::AuthProvider;
pub use services::{
    LoreAnswerer, RecommendConfig, TeamAnalysis, TeamRecommendation, TeamRecommender,
};
