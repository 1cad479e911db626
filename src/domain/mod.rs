// Domain layer - Pure models and the metric recalculation
pub mod alert;
pub mod dashboard;
pub mod error;
pub mod stream;
pub mod summary;
