mod backdrop;
mod contact;
mod hero;
mod marquee;
mod projects;
mod skills;
mod status_bar;

pub use backdrop::BackdropWidget;
pub use contact::ContactWidget;
pub use hero::HeroWidget;
pub use marquee::MarqueeWidget;
pub use projects::ProjectsWidget;
pub use skills::SkillsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::app::App;
use crate::layout::Block;
use crate::paint;
use crate::views::SectionHeader;

/// Section heading plus the divider under it
pub(crate) fn render_header(
    buf: &mut Buffer,
    app: &App,
    block: &Block,
    header: &SectionHeader,
    title: &str,
) {
    let theme = &app.theme;
    let clip = block.rect(app.layout.width);
    let x = app.layout.margin();

    let heading = app.props(header.heading);
    let style = paint::faded(theme, theme.fg0, &heading).add_modifier(Modifier::BOLD);
    let marker = paint::faded(theme, theme.red, &heading);
    paint::text(buf, clip, x, block.heading_row(), "/ ", marker, &heading);
    paint::text(buf, clip, x + 2, block.heading_row(), title, style, &heading);

    let divider = app.props(header.divider);
    paint::rule(
        buf,
        clip,
        x,
        block.divider_row(),
        app.layout.inner_width(),
        paint::faded(theme, theme.grey0, &divider),
        &divider,
    );
}

/// Column that centers `width` cells inside `area`
pub(crate) fn centered(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

pub(crate) fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    buf.set_style(area.intersection(buf.area), style);
}
