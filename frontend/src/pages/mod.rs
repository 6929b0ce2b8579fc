pub mod admin_audit_logs;
pub mod admin_users;
