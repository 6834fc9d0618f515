//! Shared application state
//!
//! The file list is built once at startup and never mutated; handlers share
//! the same snapshot for the life of the process.

use std::sync::Arc;

use crate::review::Reviewer;

#[derive(Clone)]
pub struct AppState {
    pub files: Arc<Vec<String>>,
    pub reviewer: Arc<Reviewer>,
}

impl AppState {
    pub fn new(files: Vec<String>, reviewer: Reviewer) -> Self {
        Self {
            files: Arc::new(files),
            reviewer: Arc::new(reviewer),
        }
    }
}
