// Domain layer - Sparse grid and generation stepping
pub mod domain;

// Application layer - Viewport, render planning, game loop state
pub mod application;

// Ambient concerns
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, SparseGrid, Pattern, presets, Algorithm};
pub use application::{GameState, Viewport, VisibleBounds, ZoomDirection};
pub use config::AppConfig;
pub use error::{LifeError, Result};
