// Application state and mutation methods
pub mod app;

// UI rendering
pub mod ui;
