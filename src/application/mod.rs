// Application layer - Use cases over the domain
pub mod alert_repository;
pub mod dashboard_service;
pub mod streaming_service;
pub mod summary_state;
