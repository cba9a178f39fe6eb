// Base modules
pub mod config;
pub mod errors;
pub mod inventory;
pub mod registry;
pub mod room;

// Persistence (snapshot/archive codec + reconciler)
pub mod snapshot; // src/snapshot.rs

// Relational mirror (best-effort secondary index)
pub mod mirror; // src/mirror.rs

// Session object and front-desk operations
pub mod desk; // src/desk/{mod,core,checkin,checkout,query,stats,sort}.rs

// Shared helpers (now_secs, whole_days, ...)
pub mod util; // src/util/mod.rs

// Convenience re-exports
pub use config::DeskConfig;
pub use desk::checkout::{CheckOutOutcome, Confirmation};
pub use desk::sort::SortKey;
pub use desk::stats::Stats;
pub use desk::Desk;
pub use errors::DeskError;
pub use mirror::Mirror;
pub use registry::Registry;
pub use room::{Guest, Room, RoomStatus, RoomType};
