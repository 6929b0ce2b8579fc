mod audit_log;
pub mod client;
mod directory;
pub mod types;
mod users;

pub use audit_log::AuditLogQuery;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
