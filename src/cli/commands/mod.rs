pub mod add;
pub mod analyze;
pub mod backup;
pub mod chat;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod recipes;
pub mod today;
