use crate::ui::app::Section;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split: header, hero across the top of the body, testimonials and
/// floor plans side by side below it, footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub hero: Rect,
    pub testimonials: Rect,
    pub floor_plans: Rect,
    pub footer: Rect,
}

impl Regions {
    pub fn rect(&self, section: Section) -> Rect {
        match section {
            Section::Hero => self.hero,
            Section::Testimonials => self.testimonials,
            Section::FloorPlans => self.floor_plans,
        }
    }

    /// Section under a terminal cell, if any.
    pub fn section_at(&self, column: u16, row: u16) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| contains(self.rect(*section), column, row))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    Regions {
        header,
        hero: rows[0],
        testimonials: columns[0],
        floor_plans: columns[1],
        footer,
    }
}
