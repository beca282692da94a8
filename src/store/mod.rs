// src/store/mod.rs

//! Persistence and query layer.
//!
//! Each function is a single statement against the pool, so each runs in
//! its own implicit transaction. Errors come back as `AppError`.

pub mod questions;
pub mod scores;
pub mod users;
