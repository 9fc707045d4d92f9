pub mod community;
pub mod dashboard;
pub mod features;
pub mod profile;
pub mod storage;

pub use dashboard::DashboardView;
pub use storage::{KeyValueStore, MemoryStore, StorageKey};
