//! Keyboard handling for the Tickerboard window
//!
//! Maps raw keystrokes to actions depending on what has the keyboard:
//! - An open alert takes Escape and Enter
//! - A focused text field takes typing, Backspace, Enter, Tab and Escape
//! - Otherwise 1-4 switch sections

use gpui::Keystroke;
use tickerboard_core::input::FieldId;
use tickerboard_core::navigation::Section;

/// All keyboard actions supported by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GotoSection(Section),
    DismissAlert,
    Submit,
    Backspace,
    NextField,
    Blur,
    Insert(String),
}

/// What currently owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Alert,
    Editing,
    Browsing,
}

pub fn process_keystroke(keystroke: &Keystroke, context: KeyContext) -> Option<KeyAction> {
    let modified = keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt;
    process_key(
        &keystroke.key,
        keystroke.key_char.as_deref(),
        modified,
        context,
    )
}

/// `modified` is true when Ctrl, Alt or Cmd is held
pub fn process_key(key: &str, key_char: Option<&str>, modified: bool, context: KeyContext) -> Option<KeyAction> {
    match context {
        KeyContext::Alert => match key {
            "escape" | "enter" | "return" => Some(KeyAction::DismissAlert),
            _ => None,
        },
        KeyContext::Editing => match key {
            "escape" => Some(KeyAction::Blur),
            "enter" | "return" => Some(KeyAction::Submit),
            "backspace" => Some(KeyAction::Backspace),
            "tab" => Some(KeyAction::NextField),
            _ if modified => None,
            _ => key_char
                .filter(|text| !text.is_empty())
                .map(|text| KeyAction::Insert(text.to_string())),
        },
        KeyContext::Browsing if modified => None,
        KeyContext::Browsing => Section::from_shortcut(key).map(KeyAction::GotoSection),
    }
}

/// Fields of a section in Tab order
pub fn section_fields(section: Section) -> &'static [FieldId] {
    match section {
        Section::Dashboard => &[],
        Section::Companies => &[FieldId::CompanyFilter],
        Section::Analysis => &[FieldId::AnalysisTicker, FieldId::AnalysisDays],
        Section::Compare => &[FieldId::CompareTicker1, FieldId::CompareTicker2, FieldId::CompareDays],
    }
}

/// Field after `current` in `section`, wrapping around
pub fn next_field(section: Section, current: Option<FieldId>) -> Option<FieldId> {
    let fields = section_fields(section);
    let next = current
        .and_then(|id| fields.iter().position(|f| *f == id))
        .map(|i| (i + 1) % fields.len())
        .unwrap_or(0);
    fields.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_switch_sections() {
        assert_eq!(
            process_key("1", Some("1"), false, KeyContext::Browsing),
            Some(KeyAction::GotoSection(Section::Dashboard))
        );
        assert_eq!(
            process_key("4", Some("4"), false, KeyContext::Browsing),
            Some(KeyAction::GotoSection(Section::Compare))
        );
        assert_eq!(process_key("5", Some("5"), false, KeyContext::Browsing), None);
        assert_eq!(process_key("1", None, true, KeyContext::Browsing), None);
    }

    #[test]
    fn test_digits_type_into_focused_field() {
        assert_eq!(
            process_key("2", Some("2"), false, KeyContext::Editing),
            Some(KeyAction::Insert("2".to_string()))
        );
        assert_eq!(process_key("v", Some("v"), true, KeyContext::Editing), None);
        assert_eq!(
            process_key("enter", None, false, KeyContext::Editing),
            Some(KeyAction::Submit)
        );
    }

    #[test]
    fn test_alert_swallows_other_keys() {
        assert_eq!(process_key("1", Some("1"), false, KeyContext::Alert), None);
        assert_eq!(
            process_key("escape", None, false, KeyContext::Alert),
            Some(KeyAction::DismissAlert)
        );
    }

    #[test]
    fn test_tab_order_wraps() {
        assert_eq!(next_field(Section::Compare, None), Some(FieldId::CompareTicker1));
        assert_eq!(
            next_field(Section::Compare, Some(FieldId::CompareTicker2)),
            Some(FieldId::CompareDays)
        );
        assert_eq!(
            next_field(Section::Compare, Some(FieldId::CompareDays)),
            Some(FieldId::CompareTicker1)
        );
        assert_eq!(next_field(Section::Dashboard, None), None);
    }
}
