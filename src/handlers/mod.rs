// src/handlers/mod.rs

pub mod questions;
pub mod scores;
pub mod users;
