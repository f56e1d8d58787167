//! Input dialog
//!
//! Asks a single question and collects one line of text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::DialogOutcome;
use crate::tui::layout::{centered_rect_fixed, dialog_width};
use crate::tui::widgets::TextInput;

/// A modal text input dialog
#[derive(Debug, Clone)]
pub struct InputDialog {
    pub title: String,
    pub prompt: String,
    pub input: TextInput,
}

impl InputDialog {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            input: TextInput::new().label("Amount").placeholder("0.00"),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome<String> {
        match key.code {
            KeyCode::Enter => return DialogOutcome::Done(self.input.value().trim().to_string()),
            KeyCode::Esc => return DialogOutcome::Dismissed,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return DialogOutcome::Dismissed
            }
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_start(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        DialogOutcome::Pending
    }

    /// Render the input dialog
    pub fn render(&self, frame: &mut Frame) {
        let width = dialog_width(&self.prompt, 44, 72);
        let area = centered_rect_fixed(width, 8, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(2), // Input
                Constraint::Min(1),    // Hints
            ])
            .split(inner);

        let prompt = Paragraph::new(self.prompt.as_str()).wrap(Wrap { trim: true });
        frame.render_widget(prompt, chunks[0]);

        frame.render_widget(&self.input, chunks[1]);

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" OK  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[2]);
    }
}
