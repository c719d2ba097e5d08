use std::time::{Duration, Instant};

use anyhow::Result;
use folio_core::animation::{ElementId, Follow, VisualProps};
use folio_core::content::PortfolioContent;
use folio_core::scroll::NativeInput;
use folio_core::config::EasingType;
use folio_core::{AppConfig, Stage};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};
use tracing::{debug, info};

use crate::input::Action;
use crate::layout::PageLayout;
use crate::paint;
use crate::theme::Theme;
use crate::views::{ContactView, HeroView, MarqueeView, ParallaxView, SkillsView, View, WorkView};
use crate::widgets::{
    BackdropWidget, ContactWidget, HeroWidget, MarqueeWidget, ProjectsWidget, SkillsWidget,
    StatusBarWidget,
};

/// Longest frame fed to the stage
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Fraction of the viewport moved by a page key
const PAGE_STEP: f64 = 0.9;

/// How long the cursor dot takes to catch the pointer
const CURSOR_FOLLOW: Duration = Duration::from_millis(150);

/// Rows taken by the status bar
const STATUS_ROWS: u16 = 1;

/// Application state
pub struct App {
    pub config: AppConfig,
    pub content: PortfolioContent,
    pub theme: Theme,
    pub stage: Stage,
    pub layout: PageLayout,

    pub hero: HeroView,
    pub marquee: MarqueeView,
    pub work: WorkView,
    pub skills: SkillsView,
    pub contact: ContactView,
    /// Mounted only on wide viewports with parallax enabled
    pub parallax: Option<ParallaxView>,

    pub should_quit: bool,
    pub status_message: Option<String>,
    hovering_button: bool,
    /// Row under the held button, dragging scrolls like a touch swipe
    drag_row: Option<u16>,
    /// Dot trailing the pointer in screen cells, absent on narrow viewports
    cursor: Follow,
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(config: &AppConfig, content: PortfolioContent, width: u16, height: u16) -> Result<Self> {
        let layout = PageLayout::compute(
            width,
            page_rows(height),
            &content,
            config.ui.mobile_breakpoint,
        );
        let mut stage = Stage::new(config);
        stage.resize(
            f64::from(layout.document_height),
            f64::from(layout.viewport_height),
        );

        let hero = HeroView::mount(&mut stage, &layout, &content.hero)?;
        let marquee = MarqueeView::mount(&mut stage, &layout, &content.marquee)?;
        let work = WorkView::mount(&mut stage, &layout, content.projects.len(), &config.animation)?;
        let skills = SkillsView::mount(&mut stage, &layout, content.skills.len())?;
        let contact = ContactView::mount(&mut stage, &layout, content.socials.len())?;
        let parallax = if wants_parallax(config, &layout) {
            Some(ParallaxView::mount(&mut stage, &layout)?)
        } else {
            None
        };

        info!(
            width,
            height,
            document_height = layout.document_height,
            mobile = layout.mobile,
            "Page mounted"
        );

        Ok(Self {
            config: config.clone(),
            content,
            theme: Theme::default(),
            stage,
            layout,
            hero,
            marquee,
            work,
            skills,
            contact,
            parallax,
            should_quit: false,
            status_message: None,
            hovering_button: false,
            drag_row: None,
            cursor: Follow::new(CURSOR_FOLLOW, EasingType::Power1Out),
            last_frame: None,
        })
    }

    /// Recompute the page for a new terminal size and rebind geometry
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        let layout = PageLayout::compute(
            width,
            page_rows(height),
            &self.content,
            self.config.ui.mobile_breakpoint,
        );
        self.stage.resize(
            f64::from(layout.document_height),
            f64::from(layout.viewport_height),
        );

        self.hero.relayout(&mut self.stage, &layout);
        self.marquee.relayout(&mut self.stage, &layout);
        self.work.relayout(&mut self.stage, &layout);
        self.skills.relayout(&mut self.stage, &layout);
        self.contact.relayout(&mut self.stage, &layout);

        let wanted = wants_parallax(&self.config, &layout);
        if !wanted {
            if let Some(parallax) = self.parallax.take() {
                self.stage.unmount(parallax.component())?;
            }
        } else if let Some(parallax) = self.parallax.as_mut() {
            parallax.relayout(&mut self.stage, &layout);
        } else {
            self.parallax = Some(ParallaxView::mount(&mut self.stage, &layout)?);
        }

        if layout.mobile {
            self.cursor.hide();
        }

        debug!(width, height, mobile = layout.mobile, "Relayout");
        self.layout = layout;
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) {
        self.status_message = None;
        match action {
            Action::Quit => self.should_quit = true,
            Action::Scroll(notches) => self.stage.on_input(NativeInput::Wheel(notches)),
            Action::PageDown => self.stage.scroll_by(self.page_step()),
            Action::PageUp => self.stage.scroll_by(-self.page_step()),
            Action::NextSection => {
                self.stage.go_to_next();
            }
            Action::GoToSection(index) => {
                let target = self.stage.registry().id_at(index).map(str::to_string);
                match target {
                    Some(id) => {
                        self.stage.go_to(&id);
                    }
                    None => self.set_status(format!("No section {}", index + 1)),
                }
            }
            Action::Connect => {
                self.stage.go_to_connect();
            }
            Action::JumpToTop => self.stage.scroll_to_offset(0.0),
            Action::JumpToBottom => {
                let bottom = self.stage.total_scrollable_height();
                self.stage.scroll_to_offset(bottom);
            }
            Action::None => {}
        }
    }

    pub fn on_wheel(&mut self, notches: f64) {
        self.stage.on_input(NativeInput::Wheel(notches));
    }

    /// Cursor dot and hover tracking for the connect button
    pub fn on_pointer(&mut self, column: u16, row: u16) {
        if !self.layout.mobile {
            self.cursor.retarget(f64::from(column), f64::from(row));
        }
        let over = self.hits_button(column, row);
        if over == self.hovering_button {
            return;
        }
        self.hovering_button = over;
        let fill = self.hero.button_fill;
        let binding = self.stage.binding_mut();
        if over {
            binding.pointer_enter(fill);
        } else {
            binding.pointer_leave(fill);
        }
    }

    pub fn on_click(&mut self, column: u16, row: u16) {
        self.drag_row = Some(row);
        if self.hits_button(column, row) {
            self.stage.go_to_connect();
        }
    }

    /// The page follows the held pointer, dragging up scrolls down
    pub fn on_drag(&mut self, column: u16, row: u16) {
        self.on_pointer(column, row);
        let Some(last) = self.drag_row.replace(row) else {
            return;
        };
        let rows = f64::from(last) - f64::from(row);
        if rows != 0.0 {
            self.stage.on_input(NativeInput::Touch(rows));
        }
    }

    pub fn on_release(&mut self) {
        self.drag_row = None;
    }

    fn hits_button(&self, column: u16, row: u16) -> bool {
        row < self.layout.viewport_height
            && self
                .hero
                .hits_button(column, row.saturating_add(self.scroll_row()))
    }

    /// Advance one frame by wall-clock time
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).min(MAX_FRAME))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.tick_by(dt);
    }

    /// Advance one frame by a fixed step
    pub fn tick_by(&mut self, dt: Duration) {
        self.stage.tick(dt);
        self.cursor.step(dt);
        for event in self.stage.drain_events() {
            debug!(?event, "Animation event");
        }
    }

    /// Whether the next poll should run at animation frame rate
    pub fn needs_frame(&self) -> bool {
        self.stage.needs_frame() || !self.cursor.is_settled()
    }

    /// Screen cell under the cursor dot
    pub fn cursor_cell(&self) -> Option<(u16, u16)> {
        let (x, y) = self.cursor.position()?;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        Some((x.round() as u16, y.round() as u16))
    }

    /// First document row shown on screen
    pub fn scroll_row(&self) -> u16 {
        self.stage.state().smoothed_offset.max(0.0).round() as u16
    }

    /// Current visual props of an element, defaults once it is gone
    pub fn props(&self, element: ElementId) -> VisualProps {
        self.stage
            .binding()
            .element(element)
            .map(|e| *e.props())
            .unwrap_or_default()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Tear the stage down before the terminal is restored
    pub fn shutdown(&mut self) {
        self.stage.destroy();
        self.cursor.hide();
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
            .split(frame.area());
        let page = chunks[0];

        let canvas = self.render_document(page.width);
        let background = Style::default().bg(self.theme.bg0);
        let screen = frame.buffer_mut();
        screen.set_style(page, background);
        paint::blit(&canvas, self.scroll_row(), screen, page);
        BackdropWidget::render(screen, page, self);

        StatusBarWidget::render(frame, chunks[1], self);
    }

    /// The whole page, one buffer row per document row
    pub fn render_document(&self, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, self.layout.document_height.max(1));
        let mut canvas = Buffer::empty(area);
        canvas.set_style(area, Style::default().bg(self.theme.bg0));

        HeroWidget::render(&mut canvas, self);
        MarqueeWidget::render(&mut canvas, self);
        ProjectsWidget::render(&mut canvas, self);
        SkillsWidget::render(&mut canvas, self);
        ContactWidget::render(&mut canvas, self);
        canvas
    }

    fn page_step(&self) -> f64 {
        self.stage.viewport_height() * PAGE_STEP
    }
}

fn page_rows(height: u16) -> u16 {
    height.saturating_sub(STATUS_ROWS).max(1)
}

fn wants_parallax(config: &AppConfig, layout: &PageLayout) -> bool {
    config.animation.parallax_enabled && !layout.mobile
}
