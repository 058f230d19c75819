pub mod entry;
pub mod macros;
pub mod meal;
pub mod message;
pub mod recipe;
