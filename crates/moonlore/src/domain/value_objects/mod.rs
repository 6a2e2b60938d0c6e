//! Value Objects
//!
//! Immutable value types shared across the catalog and the engines.

mod attack_type;
mod damage;
mod grade;
mod locale;
mod lore;
mod scenario;
mod sin;
mod tier;

pub use attack_type::AttackType;
pub use damage::{DamageType, WorkAffinity};
pub use grade::Grade;
pub use locale::{Locale, LocalizedText};
pub use lore::{FactionTier, SpoilerLevel};
pub use scenario::Scenario;
pub use sin::Sin;
pub use tier::Tier;
