//! Pointer interaction with the rune column

pub mod drag;

pub use drag::{DragController, DragState};
