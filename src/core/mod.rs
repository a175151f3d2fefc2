// Core infrastructure - foundational systems

pub mod bounds;
pub mod context;
pub mod events;
pub mod notify;

pub use bounds::Bounds;
pub use context::App;
pub use events::{AppEvent, EventHandler, PointerButton, PointerEvent, PointerKind};
pub use notify::{ActiveNotification, Notification, NotificationCenter, Notifier};
