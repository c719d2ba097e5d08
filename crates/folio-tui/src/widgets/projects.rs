use folio_core::animation::VisualProps;
use folio_core::content::{BentoItem, BentoKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};

use super::render_header;
use crate::app::App;
use crate::layout::BlockKind;
use crate::paint;
use crate::theme::Theme;

pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn render(buf: &mut Buffer, app: &App) {
        let Some(block) = app.layout.block(BlockKind::Work) else {
            return;
        };
        render_header(buf, app, block, &app.work.header, "Featured Work");

        let clip = block.rect(app.layout.width);
        let cards = app
            .content
            .projects
            .iter()
            .zip(&app.work.cards)
            .zip(&app.layout.cards);
        for ((item, element), rect) in cards {
            let props = app.props(*element);
            if props.opacity <= 0.01 {
                continue;
            }
            if let Some(area) = paint::translated(*rect, &props, clip) {
                render_card(buf, area, item, &props, &app.theme);
            }
        }
    }
}

fn render_card(buf: &mut Buffer, area: Rect, item: &BentoItem, props: &VisualProps, theme: &Theme) {
    let accent = matches!(item.kind, BentoKind::Project | BentoKind::Contact);
    let border = if accent { theme.red_dim } else { theme.grey0 };
    let title_color = if accent { theme.red } else { theme.fg0 };

    let frame = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(paint::faded(theme, border, props))
        .style(Style::default().bg(theme.bg1))
        .title(Span::styled(
            format!(" {} ", item.title),
            paint::faded(theme, title_color, props).add_modifier(Modifier::BOLD),
        ));
    let inner = frame.inner(area);
    frame.render(area, buf);

    Paragraph::new(card_lines(item, props, theme))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn card_lines(item: &BentoItem, props: &VisualProps, theme: &Theme) -> Vec<Line<'static>> {
    let body = paint::faded(theme, theme.fg1, props);
    let muted = paint::faded(theme, theme.grey1, props);
    let accent = paint::faded(theme, theme.red, props);
    let mut lines = Vec::new();

    if let Some(category) = &item.category {
        lines.push(Line::from(Span::styled(category.to_uppercase(), accent)));
    }
    match item.kind {
        BentoKind::Image => {
            lines.push(Line::from(Span::styled("▚▞".repeat(16), muted)));
        }
        BentoKind::Tech => {
            lines.push(Line::from(Span::styled(item.items.join(" · "), body)));
        }
        BentoKind::ComingSoon => {
            lines.push(Line::from(Span::styled("Coming soon…", muted)));
        }
        _ => {}
    }
    if let Some(description) = &item.description {
        lines.push(Line::from(Span::styled(description.clone(), body)));
    }
    if !item.tags.is_empty() {
        let tags = item
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(tags, muted)));
    }
    lines
}
