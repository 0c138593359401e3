pub mod config;
pub mod new;
pub mod open_link;
pub mod show;
