// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bot;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod reply;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use bot::{ChatBot, Disambiguation, Reply, Session};
