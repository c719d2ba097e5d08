use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use super::render_header;
use crate::app::App;
use crate::layout::BlockKind;
use crate::paint;

const NAME_WIDTH: u16 = 18;
const PERCENT_WIDTH: u16 = 6;

pub struct SkillsWidget;

impl SkillsWidget {
    pub fn render(buf: &mut Buffer, app: &App) {
        let Some(block) = app.layout.block(BlockKind::Skills) else {
            return;
        };
        let clip = block.rect(app.layout.width);
        let theme = &app.theme;

        // Shapes sit behind the bars
        for shape in &app.skills.shapes {
            let props = app.props(shape.element);
            let x = (f64::from(app.layout.width) * shape.x_ratio) as u16;
            let mut style = paint::faded(theme, theme.red, &props);
            if props.scale > 1.2 {
                style = style.add_modifier(Modifier::BOLD);
            }
            paint::text(
                buf,
                clip,
                x,
                block.top + shape.row,
                rotated(shape.glyph, props.rotation),
                style,
                &props,
            );
        }

        render_header(buf, app, block, &app.skills.header, "Core Skills");

        let x = app.layout.margin();
        let track_width = app
            .layout
            .inner_width()
            .saturating_sub(NAME_WIDTH + PERCENT_WIDTH)
            .max(8);
        let bars = app
            .content
            .skills
            .iter()
            .zip(&app.skills.bars)
            .zip(&app.layout.skill_rows);
        for ((skill, element), row) in bars {
            let props = app.props(*element);
            buf.set_stringn(
                x,
                *row,
                &skill.name,
                usize::from(NAME_WIDTH - 1),
                Style::default().fg(theme.fg1),
            );

            let track_x = x + NAME_WIDTH;
            let track = "░".repeat(usize::from(track_width));
            buf.set_string(track_x, *row, track, Style::default().fg(theme.track));

            let level = f64::from(skill.level.min(100)) / 100.0;
            let filled = paint::fraction_of(track_width, level * props.scale_x);
            if filled > 0 {
                let bar = "█".repeat(usize::from(filled));
                buf.set_string(track_x, *row, bar, Style::default().fg(theme.red));
            }

            let shown = (f64::from(skill.level) * props.scale_x.clamp(0.0, 1.0)).round();
            buf.set_string(
                track_x + track_width + 1,
                *row,
                format!("{shown:>3}%"),
                Style::default().fg(theme.grey1),
            );
        }
    }
}

/// Pick the glyph variant closest to a rotation in degrees
fn rotated(glyph: &'static str, rotation: f64) -> &'static str {
    let eighth = ((rotation / 45.0).round() as i64).rem_euclid(8) as usize;
    match (glyph, eighth % 2) {
        ("△", _) => ["△", "▷", "▽", "◁"][eighth / 2],
        ("◆", 1) => "■",
        ("□", 1) => "◇",
        _ => glyph,
    }
}
