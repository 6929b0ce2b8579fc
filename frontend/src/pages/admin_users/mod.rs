mod components;
mod layout;
mod panel;
pub mod utils;
mod view_model;

pub use panel::AdminUsersPage;
