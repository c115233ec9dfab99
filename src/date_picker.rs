//!
//! Date-picker.
//!
//! [PickerState] is the state machine: selected date, open flag,
//! view mode and the year range. It knows nothing about rendering
//! and can be driven directly.
//!
//! [DatePicker] renders a display field and, when open, the grid for
//! the active view. [DatePickerState] wraps the state machine and
//! maps keys and mouse gestures to its commands.
//!

mod grid;
mod navigation;
mod selection;
mod state;
mod style;
mod view_mode;
mod widget;

pub(crate) mod event;

pub use grid::*;
pub use selection::CellAction;
pub use state::*;
pub use style::*;
pub use widget::*;
