pub mod filters;
pub mod table;
