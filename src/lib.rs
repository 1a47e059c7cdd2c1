// lib.rs - Library root for the chatshade theme preview

pub mod chat;
pub mod cli;
pub mod config;
pub mod demo;
pub mod localization;
pub mod share;
pub mod theme_discovery;
pub mod ui;
