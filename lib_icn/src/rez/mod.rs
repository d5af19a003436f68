pub mod emitter;
pub mod pack;

pub use emitter::{emit_document, EmitError, RezOptions};
