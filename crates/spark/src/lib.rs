//! Spark - Date Idea Discovery Toolkit
//!
//! A local-first planner for discovering, saving, and rating date ideas.
//! Holds a built-in catalog of ideas, tracks the user's saved list, ratings,
//! and preferences in JSON snapshots on disk, and annotates ideas with a
//! weather lookup.

pub mod auth;
pub mod catalog;
pub mod commands;
pub mod idea;
pub mod persist;
pub mod search;
pub mod settings;
pub mod store;
pub mod weather;
