mod components;
mod panel;
pub mod utils;
mod view_model;

pub use panel::AdminAuditLogsPage;
