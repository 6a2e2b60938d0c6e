//! Supabase Integration for Moonlore
//!
//! Implements the `AuthProvider` port over the Supabase GoTrue REST API.
//! The backend only consumes sign-up, password sign-in, user lookup, and
//! sign-out; everything else the provider offers is out of scope.
//!
//! # Usage
//!
//! ```rust,ignore
//! use moonlore_integration_supabase::{SupabaseAuth, SupabaseConfig};
//!
//! let config = SupabaseConfig::new("https://xyz.supabase.co", "anon-key");
//! let auth = SupabaseAuth::new(config);
//! ```

mod auth;
mod config;

pub use auth::SupabaseAuth;
pub use config::SupabaseConfig;
