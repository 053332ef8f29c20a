//! Console front end for the HR slice: configuration, prompt parsing and the
//! interactive menu loop.

pub mod config;
pub mod input;
pub mod menu;

pub use config::{AppConfig, ListFormat};
pub use menu::{Console, MenuChoice};
