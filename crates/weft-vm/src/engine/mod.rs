//! Template rendering engine.
//!
//! [`render`] executes the operation list with a stack of capture buffers;
//! everything language-shaped is delegated to the [`EvaluationContext`].

mod bindings;
mod context;
mod error;
mod renderer;


pub use bindings::{Bindings, Helper};
pub use context::EvaluationContext;
pub use error::RenderError;
pub use renderer::render;
