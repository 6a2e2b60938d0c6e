//! Moonlore API Models
//!
//! Request/response DTOs for the public API. The wire format is camelCase,
//! matching what the site's frontend consumes. Views are flat String/number
//! shapes resolved from the catalog entities (and, where the catalog is
//! bilingual, for the requested locale).

mod ai;
mod auth;
mod limbus;
mod lobcorp;
mod ruina;

pub use ai::*;
pub use auth::*;
pub use limbus::*;
pub use lobcorp::*;
pub use ruina::*;
