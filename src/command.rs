use egui::{Key, Modifiers};

use crate::state::Tool;

/// Discrete editor actions triggered from the keyboard or the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(Tool),
    Undo,
    Redo,
    /// Blank the canvas, optionally forgetting all undo/redo steps
    Clear { reset_history: bool },
    GrowBrush,
    ShrinkBrush,
    /// Close the application; handled by the app shell
    Quit,
}

impl Command {
    /// Map a key press to a command.
    ///
    /// Undo, redo and clear need Ctrl (Cmd on macOS) and nothing else; the
    /// remaining shortcuts are bare keys.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        let command_only = modifiers.command && !modifiers.alt && !modifiers.shift;
        let bare = modifiers.is_none();

        match key {
            Key::B if bare => Some(Command::SelectTool(Tool::Brush)),
            Key::F if bare => Some(Command::SelectTool(Tool::Bucket)),
            Key::Q if bare => Some(Command::Quit),
            Key::ArrowUp if bare => Some(Command::GrowBrush),
            Key::ArrowDown if bare => Some(Command::ShrinkBrush),
            Key::N if command_only => Some(Command::Clear { reset_history: true }),
            Key::Z if command_only => Some(Command::Undo),
            Key::Y if command_only => Some(Command::Redo),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::SelectTool(tool) => tool.name(),
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear { .. } => "Clear",
            Command::GrowBrush => "Grow brush",
            Command::ShrinkBrush => "Shrink brush",
            Command::Quit => "Quit",
        }
    }
}

/// Collect shortcut commands from this frame's key presses.
pub fn commands_from_input(input: &egui::InputState) -> Vec<Command> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat,
                modifiers,
                ..
            } => {
                let command = Command::from_key(*key, *modifiers)?;
                // Only the radius keys auto-repeat
                let repeatable = matches!(command, Command::GrowBrush | Command::ShrinkBrush);
                (!*repeat || repeatable).then_some(command)
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_shortcuts() {
        assert_eq!(
            Command::from_key(Key::B, Modifiers::NONE),
            Some(Command::SelectTool(Tool::Brush))
        );
        assert_eq!(
            Command::from_key(Key::F, Modifiers::NONE),
            Some(Command::SelectTool(Tool::Bucket))
        );
    }

    #[test]
    fn test_history_shortcuts_need_command_modifier() {
        assert_eq!(Command::from_key(Key::Z, Modifiers::COMMAND), Some(Command::Undo));
        assert_eq!(Command::from_key(Key::Y, Modifiers::COMMAND), Some(Command::Redo));
        assert_eq!(
            Command::from_key(Key::N, Modifiers::COMMAND),
            Some(Command::Clear { reset_history: true })
        );
        assert_eq!(Command::from_key(Key::Z, Modifiers::NONE), None);
        assert_eq!(
            Command::from_key(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT),
            None
        );
    }

    #[test]
    fn test_brush_radius_keys() {
        assert_eq!(
            Command::from_key(Key::ArrowUp, Modifiers::NONE),
            Some(Command::GrowBrush)
        );
        assert_eq!(
            Command::from_key(Key::ArrowDown, Modifiers::NONE),
            Some(Command::ShrinkBrush)
        );
        assert_eq!(Command::from_key(Key::ArrowUp, Modifiers::CTRL), None);
    }
}
