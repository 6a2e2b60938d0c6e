//! Hand-authored catalog tables.
//!
//! One module per game. The tables mirror the community wiki data the site
//! was seeded with; ids are stable slugs referenced across tables.

pub(super) mod limbus;
pub(super) mod lobcorp;
pub(super) mod ruina;
