// GUI elements (visual components)

pub mod button;
pub mod control;
pub mod section;
pub mod slider;
pub mod tab;
pub mod toast;
pub mod toggle;
pub mod window;

pub use button::{Button, ButtonCallback, ButtonConfig, ButtonVariant};
pub use control::{Control, ControlColors, ControlId};
pub use section::{Section, SectionConfig};
pub use slider::{Slider, SliderCallback, SliderConfig};
pub use tab::{Tab, TabConfig};
pub use toast::render_toasts;
pub use toggle::{Toggle, ToggleCallback, ToggleConfig};
pub use window::{TabId, Window, WindowConfig};
