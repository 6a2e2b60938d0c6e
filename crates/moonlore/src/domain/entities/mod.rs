//! Catalog Entities
//!
//! - Sinner / Identity: the Limbus Company roster
//! - Ego: E.G.O. abilities tied to a sinner and an abnormality
//! - Abnormality / Sephirah: Lobotomy Corporation records
//! - Lore*: Library of Ruina characters, factions, and events
//! - Mirror*: Mirror Dungeon guide data
//! - Auth*: entities exchanged with the external auth provider

mod abnormality;
mod auth;
mod ego;
mod identity;
mod lore;
mod mirror;
mod sephirah;

pub use abnormality::*;
pub use auth::*;
pub use ego::*;
pub use identity::*;
pub use lore::*;
pub use mirror::*;
pub use sephirah::*;
