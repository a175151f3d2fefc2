// State-machine managers
// Interaction and animation state shared by the visual elements

pub mod drag;
pub mod tween;

pub use drag::{DragController, DragSession, DragUpdate};
pub use tween::{Tween, THEME_TWEEN};
