use crate::content::BRAND;
use crate::ui::app::Section;
use crate::ui::theme::{GLOBAL_BORDER, GOLD, HEADING, MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Brand plus section navigation; the focused section is highlighted.
    pub fn widget(&self, focus: Section) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("  ◆ ", Style::default().fg(GOLD)),
            Span::styled(
                BRAND,
                Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
            ),
            Span::styled("    ", Style::default()),
        ];
        for (idx, section) in Section::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(MUTED)));
            }
            let style = if section == focus {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADING)
            };
            spans.push(Span::styled(section.label(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
