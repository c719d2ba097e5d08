use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use super::{centered, fill};
use crate::app::App;
use crate::layout::BlockKind;
use crate::paint;
use crate::views::BUTTON_LABEL;

const TAGLINE_LINES: usize = 2;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(buf: &mut Buffer, app: &App) {
        let Some(block) = app.layout.block(BlockKind::Hero) else {
            return;
        };
        let clip = block.rect(app.layout.width);
        let theme = &app.theme;
        let hero = &app.hero;
        let geometry = &hero.geometry;

        let greeting = app.props(hero.greeting);
        let line = "Hi, I'm";
        paint::text(
            buf,
            clip,
            centered(clip, paint::cells(line)),
            geometry.greeting_row,
            line,
            paint::faded(theme, theme.fg1, &greeting),
            &greeting,
        );

        let name = app.props(hero.name);
        let line = format!("{},", hero.copy.name);
        paint::text(
            buf,
            clip,
            centered(clip, paint::cells(&line)),
            geometry.name_row,
            &line,
            paint::faded(theme, theme.red, &name).add_modifier(Modifier::BOLD),
            &name,
        );

        let headline = app.props(hero.headline);
        paint::text(
            buf,
            clip,
            centered(clip, paint::cells(&hero.copy.headline)),
            geometry.headline_row,
            &hero.copy.headline,
            paint::faded(theme, theme.fg0, &headline).add_modifier(Modifier::BOLD),
            &headline,
        );

        let tagline = app.props(hero.tagline);
        let wrap_width = app.layout.inner_width().saturating_sub(8).max(20);
        for (i, line) in wrap(&hero.copy.tagline, usize::from(wrap_width))
            .iter()
            .take(TAGLINE_LINES)
            .enumerate()
        {
            paint::text(
                buf,
                clip,
                centered(clip, paint::cells(line)),
                geometry.tagline_row.saturating_add(i as u16),
                line,
                paint::faded(theme, theme.grey1, &tagline),
                &tagline,
            );
        }

        let button = app.props(hero.button);
        let label_style = paint::faded(theme, theme.fg0, &button);
        if !paint::text(
            buf,
            clip,
            geometry.button.x,
            geometry.button.y,
            BUTTON_LABEL,
            label_style.bg(theme.bg2),
            &button,
        ) {
            return;
        }

        // Hover fill sweeps across the label from the left
        let sweep = app.props(hero.button_fill);
        let width = paint::fraction_of(geometry.button.width, sweep.scale_x);
        if width > 0 {
            if let Some(area) = paint::translated(
                Rect::new(geometry.button.x, geometry.button.y, width, 1),
                &button,
                clip,
            ) {
                fill(buf, area, Style::default().bg(theme.red).fg(theme.fg0));
            }
        }
    }
}

/// Greedy word wrap by display width
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
