use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::layout::BlockKind;
use crate::paint;

pub struct MarqueeWidget;

impl MarqueeWidget {
    pub fn render(buf: &mut Buffer, app: &App) {
        let Some(block) = app.layout.block(BlockKind::Marquee) else {
            return;
        };
        let clip = block.rect(app.layout.width);
        let theme = &app.theme;
        let marquee = &app.marquee;
        let props = app.props(marquee.element);

        let rule = Style::default().fg(theme.track);
        let border = "━".repeat(usize::from(clip.width));
        buf.set_stringn(clip.x, block.top, &border, usize::from(clip.width), rule);
        buf.set_stringn(
            clip.x,
            block.bottom().saturating_sub(1),
            &border,
            usize::from(clip.width),
            rule,
        );

        // Enough repetitions to cover the screen after the full travel
        let unit = format!("{}   ", marquee.text);
        let needed = app.layout.width + marquee.segment_width(&app.layout);
        let repeats = usize::from(needed) / unit.width().max(1) + 2;
        let line = unit.repeat(repeats);
        let style = Style::default()
            .fg(theme.marquee)
            .add_modifier(Modifier::BOLD);
        paint::text(buf, clip, clip.x, block.top + block.height / 2, &line, style, &props);
    }
}
