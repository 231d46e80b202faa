pub mod db;
pub mod remote;
pub mod session;
pub mod time;

pub use db::repositories::DieselTodoMirrorRepository;
pub use remote::{RestTodoStore, RestTodoStoreConfig};
pub use session::{InMemorySessionStore, StaticSessionProvider};
pub use time::SystemClock;
