use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::App;

const CURSOR_GLYPH: &str = "●";

pub struct BackdropWidget;

impl BackdropWidget {
    /// Screen-fixed shapes, drawn after the page so they stay put while it scrolls
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        Self::render_shapes(buf, area, app);
        Self::render_cursor(buf, area, app);
    }

    fn render_shapes(buf: &mut Buffer, area: Rect, app: &App) {
        let Some(parallax) = &app.parallax else {
            return;
        };
        let style = Style::default().fg(app.theme.red_deep);
        for shape in &parallax.shapes {
            let props = app.props(shape.element);
            let x = f64::from(area.x) + f64::from(area.width) * shape.x_ratio + props.translate_x;
            let y = f64::from(area.y) + f64::from(area.height) * shape.y_ratio + props.translate_y;
            if x < f64::from(area.x) || y < f64::from(area.y) {
                continue;
            }
            let (x, y) = (x.round() as u16, y.round() as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            let glyph = if props.rotation.abs() >= 22.5 && shape.glyph == "■" {
                "◆"
            } else {
                shape.glyph
            };
            // Only into empty cells, the page stays in front
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() == " " {
                    cell.set_symbol(glyph).set_style(style);
                }
            }
        }
    }

    /// The dot trailing the pointer sits above everything on the page
    fn render_cursor(buf: &mut Buffer, area: Rect, app: &App) {
        let Some((x, y)) = app.cursor_cell() else {
            return;
        };
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(CURSOR_GLYPH)
                .set_style(Style::default().fg(app.theme.red));
        }
    }
}
