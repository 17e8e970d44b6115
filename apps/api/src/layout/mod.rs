// Report layout engine.
// Turns one StudentRecord into a paginated PDF: static section/field tables,
// a single-owner builder for cursor and page-break state, and a lopdf writer.
// Rendering is CPU-bound; handlers call it inside tokio::task::spawn_blocking.

pub mod date;
pub mod document;
pub mod engine;
pub mod fields;
pub mod font_metrics;
pub mod page;
pub mod pdf;

// Re-export the public API consumed by the route handlers.
pub use engine::render;
pub use page::{default_page_config, PageConfig};
pub use pdf::RenderError;
