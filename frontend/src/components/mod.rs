pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod layout;
pub mod pager;
pub mod search;
pub mod selectors;
