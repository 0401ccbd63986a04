//! Markdown rendering and the asynchronous preview slot.

mod html;
mod preview;

pub use html::{CommonMark, MarkdownRenderer, markdown_to_html};
pub use preview::Preview;

use thiserror::Error;

/// Errors produced while rendering markdown.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer rejected the input.
    #[error("markdown render failed: {0}")]
    Markdown(String),

    /// The renderer panicked on the worker thread.
    #[error("markdown renderer panicked")]
    Panicked,

    /// The preview runtime could not be started.
    #[error("failed to start the preview runtime")]
    Runtime(#[source] std::io::Error),
}
