use crate::dataset::Dataset;
use std::sync::Arc;

/// Shared by every request. The dataset is read-only once loaded, so no lock.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
