use crate::carousel::CarouselState;
use crate::ui::app::{App, Section};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::theme::{
    BACKGROUND, BODY_TEXT, FOCUS_BORDER, GLOBAL_BORDER, GOLD, HEADING, INACTIVE_DOT, MUTED,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let regions = crate::ui::layout::layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.focus()), regions.header);

    for section in Section::ALL {
        let area = regions.rect(section);
        frame.render_widget(Clear, area);
        let block = section_block(app, section);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match section {
            Section::Hero => hero_lines(app),
            Section::Testimonials => testimonial_lines(app),
            Section::FloorPlans => floor_plan_lines(app),
        };
        render_sliding(frame, lines, inner, app.slide_offset(section, inner.width, now));
    }

    frame.render_widget(Footer::new().widget(app.notice()), regions.footer);
}

fn section_block(app: &App, section: Section) -> Block<'static> {
    let border = if app.focus() == section {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    Block::default()
        .title(format!(" {} ", section.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(BACKGROUND))
}

/// Render slide content displaced by the running transition.
///
/// The slide is laid out at rest in a scratch buffer, then copied into the
/// frame `offset` columns to the right (Forward) or left (Backward).
/// Columns uncovered by the shift keep the cleared background.
fn render_sliding(frame: &mut Frame<'_>, lines: Vec<Line<'static>>, area: Rect, offset: i32) {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    if offset == 0 {
        frame.render_widget(paragraph, area);
        return;
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
    scratch.set_style(scratch.area, Style::default().bg(BACKGROUND));
    paragraph.render(scratch.area, &mut scratch);

    let target = frame.buffer_mut();
    for y in 0..area.height {
        for x in 0..area.width {
            let source = i32::from(x) - offset;
            if source < 0 || source >= i32::from(area.width) {
                continue;
            }
            let Some(cell) = scratch.cell((source as u16, y)) else {
                continue;
            };
            if let Some(slot) = target.cell_mut((area.x + x, area.y + y)) {
                *slot = cell.clone();
            }
        }
    }
}

fn dots(state: &CarouselState) -> Line<'static> {
    let mut spans = Vec::with_capacity(state.slide_count * 2);
    for index in 0..state.slide_count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == state.current_index {
            spans.push(Span::styled("━━", Style::default().fg(GOLD)));
        } else {
            spans.push(Span::styled("•", Style::default().fg(INACTIVE_DOT)));
        }
    }
    Line::from(spans)
}

fn autoplay_badge(state: &CarouselState, enabled: bool) -> Span<'static> {
    if !enabled {
        Span::styled("manual", Style::default().fg(MUTED))
    } else if state.is_autoplaying {
        Span::styled("▶ autoplay", Style::default().fg(GOLD))
    } else {
        Span::styled("❚❚ paused", Style::default().fg(MUTED))
    }
}

fn hero_lines(app: &App) -> Vec<Line<'static>> {
    let carousel = app.hero();
    let slide = carousel.current();
    let state = carousel.state();
    vec![
        Line::from(Span::styled(
            slide.tag.to_uppercase(),
            Style::default().fg(GOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            slide.title,
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(slide.subtitle, Style::default().fg(GOLD))),
        Line::from(""),
        Line::from(Span::styled(slide.location, Style::default().fg(BODY_TEXT))),
        Line::from(Span::styled(slide.image, Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}/{}  ", state.current_index + 1, state.slide_count),
                Style::default().fg(MUTED),
            ),
            autoplay_badge(state, carousel.config().autoplay),
        ]),
        dots(state),
    ]
}

fn testimonial_lines(app: &App) -> Vec<Line<'static>> {
    let carousel = app.testimonials();
    let testimonial = carousel.current();
    let state = carousel.state();
    vec![
        Line::from(Span::styled(
            "★".repeat(testimonial.rating as usize),
            Style::default().fg(GOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", testimonial.quote),
            Style::default().fg(HEADING).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(testimonial.author, Style::default().fg(HEADING))),
        Line::from(Span::styled(testimonial.title, Style::default().fg(GOLD))),
        Line::from(""),
        dots(state),
    ]
}

fn floor_plan_lines(app: &App) -> Vec<Line<'static>> {
    let carousel = app.floor_plans();
    let state = carousel.state();
    let mut lines = Vec::new();

    for (index, plan) in carousel.slides().iter().enumerate() {
        let active = index == state.current_index;
        let marker = if active { "▸ " } else { "  " };
        let style = if active {
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}. ", marker, index + 1), Style::default().fg(GOLD)),
            Span::styled(plan.name, style),
        ]));
    }

    let plan = carousel.current();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} sqft", plan.area_sqft),
        Style::default().fg(GOLD),
    )));
    lines.push(Line::from(Span::styled(
        plan.summary(),
        Style::default().fg(BODY_TEXT),
    )));
    lines.push(Line::from(Span::styled(
        format!("Parking: {}", plan.parking),
        Style::default().fg(BODY_TEXT),
    )));
    lines.push(Line::from(Span::styled(plan.image, Style::default().fg(MUTED))));
    lines
}
