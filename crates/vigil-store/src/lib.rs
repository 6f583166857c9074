//! Vigil Store - collaborator contracts and storage variants
//!
//! Defines the interfaces the guard consumes: a user-lookup provider and the
//! two request-scoped state stores (opaque key/value session data plus a
//! client-held token with an expiry). Ships a DashMap-backed in-memory set
//! and a SQLx/Postgres user provider; further variants are added by
//! implementing the traits, not by touching the guard.
//!
//! # Example
//!
//! ```rust,ignore
//! use vigil_store::{CreateUser, MemoryUserProvider, UserProvider};
//!
//! let users = MemoryUserProvider::new();
//! users.create(CreateUser::new("user@example.com", "s3cret"))?;
//!
//! let found = users.find_by_uid("user@example.com").await?;
//! ```

pub mod error;
pub mod hash;
pub mod memory;
pub mod models;
pub mod pg;
pub mod provider;
pub mod state;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryClientTokenStore, MemorySessionStore, MemoryUserProvider};
pub use models::{CreateUser, UserRow};
pub use pg::PgUserProvider;
pub use provider::{Identity, UserProvider};
pub use state::{ClientTokenStore, SessionStore};
