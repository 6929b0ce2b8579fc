mod entities;
mod entity_select;
mod options;

pub use entities::*;
pub use options::*;
