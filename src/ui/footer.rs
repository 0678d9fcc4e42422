use crate::ui::theme::{GLOBAL_BORDER, GOLD, MUTED, STATUS_ERROR};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints, or the last rejected command when there is one.
    pub fn widget(&self, notice: Option<&str>) -> Paragraph<'static> {
        let line = match notice {
            Some(message) => Line::from(vec![
                Span::styled("  ! ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
            ]),
            None => {
                let hints = [
                    ("←/→", "slide"),
                    ("1-9", "jump"),
                    ("Tab", "section"),
                    ("Space", "autoplay"),
                    ("drag", "swipe"),
                    ("q", "quit"),
                ];
                let mut spans = vec![Span::raw("  ")];
                for (key, action) in hints {
                    spans.push(Span::styled(key, Style::default().fg(GOLD)));
                    spans.push(Span::styled(format!(" {}   ", action), Style::default().fg(MUTED)));
                }
                Line::from(spans)
            }
        };

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
