//! nestdb - An embedded, concurrency-safe document store
//!
//! A single-process store for structured records (users, posts, refresh
//! tokens) persisted to one on-disk JSON file. Every mutation reloads the
//! file, applies under an exclusive lock, and rewrites the whole snapshot;
//! reads serve from memory.

pub mod auth;
pub mod cli;
pub mod config;
pub mod content;
pub mod errors;
pub mod snapshot;
pub mod storage;
pub mod store;
