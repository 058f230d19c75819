pub mod analyzer;
pub mod backup;
pub mod chat;
pub mod foodlog;
pub mod log;
pub mod recipes;
