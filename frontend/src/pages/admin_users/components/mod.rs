pub mod create_user_form;
pub mod deactivate_dialog;
pub mod user_list;
