use crate::_private::NonExhaustive;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Composite style for the date-picker.
///
/// Passed to the widget for each render, there is no shared styling
/// state between pickers.
#[derive(Debug, Clone)]
pub struct DatePickerStyle {
    /// Base style.
    pub style: Style,
    /// Display field.
    pub field: Option<Style>,
    /// Field when focused.
    pub focus: Option<Style>,
    /// Popup base style.
    pub popup: Option<Style>,
    /// Popup border.
    pub popup_block: Option<Block<'static>>,
    /// Title in the popup border.
    pub title: Option<Style>,
    /// Prev/next, month/year and today buttons.
    pub button: Option<Style>,
    /// Weekday headers.
    pub weekday: Option<Style>,
    /// Regular cells.
    pub cell: Option<Style>,
    /// Selected cell.
    pub select: Option<Style>,
    /// Cell for today.
    pub today: Option<Style>,
    /// Cell under the mouse.
    pub hover: Option<Style>,
    pub non_exhaustive: NonExhaustive,
}

impl Default for DatePickerStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            field: None,
            focus: None,
            popup: None,
            popup_block: None,
            title: None,
            button: None,
            weekday: None,
            cell: None,
            select: None,
            today: None,
            hover: None,
            non_exhaustive: NonExhaustive,
        }
    }
}
