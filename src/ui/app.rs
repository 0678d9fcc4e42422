use crate::carousel::{
    Carousel, CarouselState, Direction, DragOutcome, DragRelease, TimerDriver, TimerToken,
};
use crate::config::Config;
use crate::content::{self, FloorPlan, HeroSlide, Testimonial};
use crate::error::CarouselError;
use crate::ui::events::AppEvent;
use crate::ui::layout::{layout_regions, Regions};
use crate::ui::transition::SlideTransition;
use ratatui::layout::Rect;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// Drag units per terminal column. A cell is roughly eight pixels wide, so
/// the 50-unit default threshold needs a swipe of about seven columns.
pub const DRAG_UNITS_PER_COLUMN: f32 = 8.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Section {
    Hero,
    Testimonials,
    FloorPlans,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Hero, Section::Testimonials, Section::FloorPlans];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Testimonials => "Testimonials",
            Section::FloorPlans => "Floor Plans",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::Hero => Section::Testimonials,
            Section::Testimonials => Section::FloorPlans,
            Section::FloorPlans => Section::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Section::Hero => Section::FloorPlans,
            Section::Testimonials => Section::Hero,
            Section::FloorPlans => Section::Testimonials,
        }
    }
}

/// Uniform handle over carousels with different slide payloads.
trait Controls {
    fn start(&mut self);
    fn stop(&mut self);
    fn next(&mut self);
    fn prev(&mut self);
    fn go_to(&mut self, index: usize) -> Result<(), CarouselError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn begin_drag(&mut self);
    fn release_drag(&mut self, release: DragRelease) -> DragOutcome;
    fn on_timer(&mut self, token: TimerToken) -> bool;
    fn state(&self) -> &CarouselState;
}

impl<T> Controls for Carousel<T> {
    fn start(&mut self) {
        Carousel::start(self)
    }
    fn stop(&mut self) {
        Carousel::stop(self)
    }
    fn next(&mut self) {
        Carousel::next(self)
    }
    fn prev(&mut self) {
        Carousel::prev(self)
    }
    fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        Carousel::go_to(self, index)
    }
    fn pause(&mut self) {
        Carousel::pause(self)
    }
    fn resume(&mut self) {
        Carousel::resume(self)
    }
    fn begin_drag(&mut self) {
        Carousel::begin_drag(self)
    }
    fn release_drag(&mut self, release: DragRelease) -> DragOutcome {
        Carousel::release_drag(self, release)
    }
    fn on_timer(&mut self, token: TimerToken) -> bool {
        Carousel::on_timer(self, token)
    }
    fn state(&self) -> &CarouselState {
        Carousel::state(self)
    }
}

#[derive(Clone, Copy, Debug)]
struct PointerDrag {
    section: Section,
    start_column: u16,
    started_at: Instant,
}

/// Hover pause on the hero. `resume_after` mirrors the drag session rule.
#[derive(Clone, Copy, Debug)]
struct Hover {
    resume_after: bool,
}

pub struct App {
    should_quit: bool,
    focus: Section,
    area: Rect,
    hero: Carousel<HeroSlide>,
    testimonials: Carousel<Testimonial>,
    floor_plans: Carousel<FloorPlan>,
    transitions: Vec<(Section, SlideTransition)>,
    transition_duration: Duration,
    pointer: Option<PointerDrag>,
    hover: Option<Hover>,
    notice: Option<String>,
}

impl App {
    /// Build the three carousels.
    ///
    /// `make_driver` supplies the autoplay clock per section. State changes
    /// are forwarded to `events` as [`AppEvent::SlideChanged`].
    pub fn new<F>(
        config: &Config,
        mut make_driver: F,
        events: Sender<AppEvent>,
    ) -> Result<Self, CarouselError>
    where
        F: FnMut(Section) -> Box<dyn TimerDriver>,
    {
        let mut hero = Carousel::new(
            content::hero_slides(),
            config.hero.clone(),
            make_driver(Section::Hero),
        )?
        .named("hero");
        let mut testimonials = Carousel::new(
            content::testimonials(),
            config.testimonials.clone(),
            make_driver(Section::Testimonials),
        )?
        .named("testimonials");
        let mut floor_plans = Carousel::new(
            content::floor_plans(),
            config.floor_plans.clone(),
            make_driver(Section::FloorPlans),
        )?
        .named("floor_plans");

        let tx = events.clone();
        hero.subscribe(move |snapshot| {
            let _ = tx.send(AppEvent::SlideChanged {
                section: Section::Hero,
                direction: snapshot.direction,
            });
        });
        let tx = events.clone();
        testimonials.subscribe(move |snapshot| {
            let _ = tx.send(AppEvent::SlideChanged {
                section: Section::Testimonials,
                direction: snapshot.direction,
            });
        });
        let tx = events;
        floor_plans.subscribe(move |snapshot| {
            let _ = tx.send(AppEvent::SlideChanged {
                section: Section::FloorPlans,
                direction: snapshot.direction,
            });
        });

        Ok(Self {
            should_quit: false,
            focus: Section::Hero,
            area: Rect::default(),
            hero,
            testimonials,
            floor_plans,
            transitions: Vec::new(),
            transition_duration: config.ui.transition(),
            pointer: None,
            hover: None,
            notice: None,
        })
    }

    fn controls(&mut self, section: Section) -> &mut dyn Controls {
        match section {
            Section::Hero => &mut self.hero,
            Section::Testimonials => &mut self.testimonials,
            Section::FloorPlans => &mut self.floor_plans,
        }
    }

    /// Mount every carousel.
    pub fn start(&mut self) {
        for section in Section::ALL {
            self.controls(section).start();
        }
    }

    /// Unmount every carousel, cancelling pending autoplay.
    pub fn stop(&mut self) {
        for section in Section::ALL {
            self.controls(section).stop();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Section {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn hero(&self) -> &Carousel<HeroSlide> {
        &self.hero
    }

    pub fn testimonials(&self) -> &Carousel<Testimonial> {
        &self.testimonials
    }

    pub fn floor_plans(&self) -> &Carousel<FloorPlan> {
        &self.floor_plans
    }

    pub fn state(&self, section: Section) -> &CarouselState {
        match section {
            Section::Hero => self.hero.state(),
            Section::Testimonials => self.testimonials.state(),
            Section::FloorPlans => self.floor_plans.state(),
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn next(&mut self) {
        self.notice = None;
        let focus = self.focus;
        self.controls(focus).next();
    }

    pub fn prev(&mut self) {
        self.notice = None;
        let focus = self.focus;
        self.controls(focus).prev();
    }

    /// Dot navigation on the focused section.
    pub fn go_to(&mut self, index: usize) {
        let focus = self.focus;
        self.notice = match self.controls(focus).go_to(index) {
            Ok(()) => None,
            Err(err) => Some(err.to_string()),
        };
    }

    /// Space bar: pause a playing carousel, resume a paused one.
    pub fn toggle_autoplay(&mut self) {
        let focus = self.focus;
        let controls = self.controls(focus);
        if controls.state().is_autoplaying {
            controls.pause();
        } else {
            controls.resume();
        }
        // an explicit toggle under the pointer decides what leaving restores
        if focus == Section::Hero {
            if let Some(hover) = self.hover.as_mut() {
                hover.resume_after = self.hero.state().is_autoplaying;
            }
        }
    }

    pub fn on_autoplay(&mut self, section: Section, token: TimerToken) -> bool {
        self.controls(section).on_timer(token)
    }

    /// A carousel emitted a new snapshot: start its slide-in animation.
    pub fn on_slide_changed(&mut self, section: Section, direction: Direction, now: Instant) {
        self.transitions.retain(|(s, _)| *s != section);
        if direction != Direction::None {
            self.transitions.push((
                section,
                SlideTransition::new(direction, now, self.transition_duration),
            ));
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.transitions.retain(|(_, t)| !t.is_finished(now));
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn regions(&self) -> Regions {
        layout_regions(self.area)
    }

    /// Horizontal offset of the entering slide, in columns.
    pub fn slide_offset(&self, section: Section, width: u16, now: Instant) -> i32 {
        self.transitions
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, t)| t.offset(width, now))
            .unwrap_or(0)
    }

    pub fn is_animating(&self, section: Section) -> bool {
        self.transitions.iter().any(|(s, _)| *s == section)
    }

    pub fn on_pointer_down(&mut self, column: u16, row: u16, now: Instant) {
        let Some(section) = self.regions().section_at(column, row) else {
            return;
        };
        // The release of the previous press never arrived (button let go
        // outside the terminal). Settle it in place so its autoplay resumes.
        if let Some(stale) = self.pointer.take() {
            self.controls(stale.section)
                .release_drag(DragRelease::new(0.0, 0.0));
        }
        self.focus = section;
        self.controls(section).begin_drag();
        self.pointer = Some(PointerDrag {
            section,
            start_column: column,
            started_at: now,
        });
    }

    pub fn on_pointer_up(&mut self, column: u16, now: Instant) -> Option<DragOutcome> {
        let drag = self.pointer.take()?;
        let offset_x = (column as f32 - drag.start_column as f32) * DRAG_UNITS_PER_COLUMN;
        let elapsed = now
            .saturating_duration_since(drag.started_at)
            .as_secs_f32()
            .max(0.001);
        let release = DragRelease::new(offset_x, offset_x / elapsed);
        let outcome = self.controls(drag.section).release_drag(release);
        if outcome != DragOutcome::SnapBack {
            self.notice = None;
        }
        Some(outcome)
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Pointer moved: hovering the hero holds its autoplay.
    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        let over_hero = self.regions().section_at(column, row) == Some(Section::Hero);
        match (over_hero, self.hover) {
            (true, None) => {
                self.hover = Some(Hover {
                    resume_after: self.hero.state().is_autoplaying,
                });
                self.hero.pause();
            }
            (false, Some(hover)) => {
                self.hover = None;
                if hover.resume_after {
                    self.hero.resume();
                }
            }
            _ => {}
        }
    }

    pub fn is_hovering_hero(&self) -> bool {
        self.hover.is_some()
    }
}
