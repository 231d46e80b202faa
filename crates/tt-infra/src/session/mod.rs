//! Session adapters.
//!
//! The identity provider lives outside this crate; these adapters only hold
//! what it handed back (user id and access token) and broadcast changes.

mod in_memory;
mod static_session;

pub use in_memory::InMemorySessionStore;
pub use static_session::StaticSessionProvider;
