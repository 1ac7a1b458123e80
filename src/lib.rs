pub mod config;
pub mod items;
pub mod logging;
pub mod picker;
pub mod state;
pub mod tui_app;
pub mod widget_traits;
pub mod widgets;

pub use picker::{Item, PickerEvent, PickerState};
pub use widgets::tag_picker::{PickerAction, TagPickerConfig, TagPickerWidget};
