//! Confirmation dialog
//!
//! Yes / No / Cancel question. `Y` and `N` answer directly, arrow keys and
//! Tab move the selection, Enter picks it, Esc cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::DialogOutcome;
use crate::prompt::Confirmation;
use crate::tui::layout::{centered_rect_fixed, dialog_width};

const BUTTONS: [Confirmation; 3] = [Confirmation::Yes, Confirmation::No, Confirmation::Cancelled];

/// A modal yes/no/cancel dialog
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    selected: usize,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> Confirmation {
        BUTTONS[self.selected]
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome<Confirmation> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DialogOutcome::Dismissed
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogOutcome::Done(Confirmation::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => DialogOutcome::Done(Confirmation::No),
            KeyCode::Esc => DialogOutcome::Dismissed,
            KeyCode::Enter => DialogOutcome::Done(self.selected()),
            KeyCode::Right | KeyCode::Tab => {
                self.selected = (self.selected + 1) % BUTTONS.len();
                DialogOutcome::Pending
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.selected = (self.selected + BUTTONS.len() - 1) % BUTTONS.len();
                DialogOutcome::Pending
            }
            _ => DialogOutcome::Pending,
        }
    }

    /// Render the confirmation dialog
    pub fn render(&self, frame: &mut Frame) {
        let width = dialog_width(&self.message, 44, 72);
        let area = centered_rect_fixed(width, 7, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let button = |index: usize, key: &'static str, text: &'static str, color: Color| {
            let mut style = Style::default().fg(color);
            if index == self.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            vec![Span::styled(key, style), Span::raw(text)]
        };

        let mut buttons = Vec::new();
        buttons.extend(button(0, "[Y]", " Yes  ", Color::Green));
        buttons.extend(button(1, "[N]", " No  ", Color::Red));
        buttons.extend(button(2, "[Esc]", " Cancel", Color::Yellow));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.as_str(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(buttons),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_direct_answers() {
        let mut dialog = ConfirmDialog::new("Budget Analysis App", "More?");
        assert_eq!(
            dialog.handle_key(key(KeyCode::Char('y'))),
            DialogOutcome::Done(Confirmation::Yes)
        );
        assert_eq!(
            dialog.handle_key(key(KeyCode::Char('N'))),
            DialogOutcome::Done(Confirmation::No)
        );
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogOutcome::Dismissed);
    }

    #[test]
    fn test_selection_cycles() {
        let mut dialog = ConfirmDialog::new("t", "m");
        assert_eq!(dialog.selected(), Confirmation::Yes);
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.selected(), Confirmation::No);
        dialog.handle_key(key(KeyCode::Tab));
        assert_eq!(dialog.selected(), Confirmation::Cancelled);
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.selected(), Confirmation::Yes);
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogOutcome::Done(Confirmation::Cancelled)
        );
    }
}
