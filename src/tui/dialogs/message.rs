//! Message dialog
//!
//! Shows the final outcome, or an error, until any key is pressed.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::{centered_rect_fixed, dialog_width};

/// A modal message dialog
#[derive(Debug, Clone)]
pub struct MessageDialog {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageDialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::info(title, message)
        }
    }

    /// Any key closes the dialog
    pub fn handle_key(&mut self, _key: KeyEvent) -> bool {
        true
    }

    /// Render the message dialog
    pub fn render(&self, frame: &mut Frame) {
        let line_count = self.message.lines().count() as u16;
        let width = dialog_width(&self.message, 44, 76);
        let area = centered_rect_fixed(width, line_count + 6, frame.area());

        frame.render_widget(Clear, area);

        let color = if self.is_error { Color::Red } else { Color::Green };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let mut lines = vec![Line::from("")];
        lines.extend(
            self.message
                .lines()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White)))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_multiline_message() {
        let dialog = MessageDialog::info(
            "Budget Analysis App",
            "You are under budget by $400.00\nTotal monthly expenses = $600.00",
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| dialog.render(frame)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("You are under budget by $400.00"));
        assert!(screen.contains("Total monthly expenses = $600.00"));
    }
}
