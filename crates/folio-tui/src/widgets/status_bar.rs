use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::paint;

const PROGRESS_CELLS: u16 = 10;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = app.stage.state();
        let base = Style::default().bg(theme.bg2);

        let section = state
            .active_section_id
            .as_deref()
            .unwrap_or("-")
            .to_uppercase();
        let filled = paint::fraction_of(PROGRESS_CELLS, state.progress);
        let progress = format!(
            "{}{}",
            "▰".repeat(usize::from(filled)),
            "▱".repeat(usize::from(PROGRESS_CELLS - filled))
        );

        // One dot per registered section, the active one lit
        let dots: String = app
            .stage
            .registry()
            .ids()
            .map(|id| if state.is_active(id) { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");

        let mut spans = vec![
            Span::styled(" FOLIO ", base.fg(theme.bg0).bg(theme.red).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {section} "), base.fg(theme.fg0)),
            Span::styled(format!("{dots} "), base.fg(theme.grey1)),
            Span::styled(progress, base.fg(theme.red)),
            Span::styled(format!(" {:>3}% ", state.percent()), base.fg(theme.grey1)),
        ];
        if let Some(message) = &app.status_message {
            spans.push(Span::styled(format!("| {message} "), base.fg(theme.fg1)));
        } else if app.stage.shows_connect() {
            spans.push(Span::styled(
                "| c: Let's Connect › ",
                base.fg(theme.red).add_modifier(Modifier::BOLD),
            ));
        }

        let help_hint = " q:quit j/k:scroll n:next 1-9:section ";
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding_len = usize::from(area.width).saturating_sub(used + help_hint.width());
        spans.push(Span::styled(" ".repeat(padding_len), base));
        spans.push(Span::styled(help_hint, base.fg(theme.grey0)));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}
