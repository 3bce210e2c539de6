pub mod api;
pub mod board;
pub mod chat;
pub mod config;
pub mod content;
pub mod countdown;
pub mod map;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
