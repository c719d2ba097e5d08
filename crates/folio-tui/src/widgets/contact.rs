use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use super::{centered, render_header};
use crate::app::App;
use crate::layout::BlockKind;
use crate::paint;

const INVITE: &str = "Have a project in mind? Let's build something together.";
const FOOTER: &str = "© folio · press q to leave";

pub struct ContactWidget;

impl ContactWidget {
    pub fn render(buf: &mut Buffer, app: &App) {
        let Some(block) = app.layout.block(BlockKind::Contact) else {
            return;
        };
        render_header(buf, app, block, &app.contact.header, "Get In Touch");

        let clip = block.rect(app.layout.width);
        let theme = &app.theme;
        let x = app.layout.margin();

        let heading = app.props(app.contact.header.heading);
        if let Some(first) = app.layout.contact_rows.first() {
            paint::text(
                buf,
                clip,
                x,
                first.saturating_sub(2),
                INVITE,
                paint::faded(theme, theme.grey1, &heading),
                &heading,
            );
        }

        let socials = app
            .content
            .socials
            .iter()
            .map(|s| (format!("→ {:<12}", s.name), s.link.as_str()));
        let lines = std::iter::once((String::from("✉ "), app.content.email.as_str())).chain(socials);
        for (((label, value), element), row) in lines
            .zip(&app.contact.lines)
            .zip(&app.layout.contact_rows)
        {
            let props = app.props(*element);
            let label_style = paint::faded(theme, theme.red, &props);
            if !paint::text(buf, clip, x, *row, &label, label_style, &props) {
                continue;
            }
            let value_style = paint::faded(theme, theme.fg0, &props).add_modifier(Modifier::BOLD);
            paint::text(
                buf,
                clip,
                x.saturating_add(paint::cells(&label)),
                *row,
                value,
                value_style,
                &props,
            );
        }

        let footer_row = block.bottom().saturating_sub(2);
        buf.set_string(
            centered(clip, paint::cells(FOOTER)),
            footer_row,
            FOOTER,
            Style::default().fg(theme.grey0),
        );
    }
}
