// src/specs/mod.rs
//! Feed readers. Each module knows one payload shape and turns it into typed
//! records; none of them cache or format anything.

pub mod fantasy;
pub mod news;
pub mod players;
pub mod schedule;
pub mod scoreboard;
pub mod standings;
pub mod teams;
