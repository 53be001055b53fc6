//! Library entry for trivia-browser exposing the view logic for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
