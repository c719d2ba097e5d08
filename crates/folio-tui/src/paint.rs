//! Applying element visual props to terminal cells

use folio_core::animation::VisualProps;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Move `rect` by the element's translation and clip it to `clip`
pub fn translated(rect: Rect, props: &VisualProps, clip: Rect) -> Option<Rect> {
    let x = i32::from(rect.x) + props.translate_x.round() as i32;
    let y = i32::from(rect.y) + props.translate_y.round() as i32;

    let left = x.max(i32::from(clip.x));
    let top = y.max(i32::from(clip.y));
    let right = (x + i32::from(rect.width)).min(i32::from(clip.right()));
    let bottom = (y + i32::from(rect.height)).min(i32::from(clip.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Display width of `content` in cells, saturating for oversized text
pub fn cells(content: &str) -> u16 {
    u16::try_from(content.width()).unwrap_or(u16::MAX)
}

/// Cells shown out of `width` for a fraction in [0, 1]
pub fn fraction_of(width: u16, fraction: f64) -> u16 {
    (f64::from(width) * fraction.clamp(0.0, 1.0)).round() as u16
}

/// Foreground style faded by the element's opacity
pub fn faded(theme: &Theme, color: Color, props: &VisualProps) -> Style {
    Style::default().fg(theme.fade(color, props.opacity))
}

/// Draw a line of text with the element's translation, opacity and reveal
///
/// Returns false when nothing landed inside `clip`.
pub fn text(
    buf: &mut Buffer,
    clip: Rect,
    x: u16,
    y: u16,
    content: &str,
    style: Style,
    props: &VisualProps,
) -> bool {
    if props.opacity <= 0.01 {
        return false;
    }
    let width = cells(content);
    let Some(area) = translated(Rect::new(x, y, width.max(1), 1), props, clip) else {
        return false;
    };
    let visible = fraction_of(width, props.reveal);
    if visible == 0 {
        return false;
    }

    // Text shifted left off the clip loses its leading cells
    let shift = i32::from(x) + props.translate_x.round() as i32;
    let skip = (i32::from(area.x) - shift).max(0) as usize;
    let shown: String = content
        .chars()
        .skip(skip)
        .take(usize::from(visible.saturating_sub(skip as u16)))
        .collect();
    buf.set_stringn(area.x, area.y, shown, usize::from(area.width), style);
    true
}

/// Horizontal rule scaled from the left by `scale_x`
pub fn rule(buf: &mut Buffer, clip: Rect, x: u16, y: u16, width: u16, style: Style, props: &VisualProps) {
    let length = fraction_of(width, props.scale_x);
    if length == 0 {
        return;
    }
    let line = "─".repeat(usize::from(length));
    text(buf, clip, x, y, &line, style, props);
}

/// Copy the visible window of a document canvas onto the screen
pub fn blit(canvas: &Buffer, offset: u16, screen: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        let source_y = offset.saturating_add(row);
        for column in 0..area.width {
            let source = canvas.cell((area.x + column, source_y));
            let target = screen.cell_mut((area.x + column, area.y + row));
            if let (Some(source), Some(target)) = (source, target) {
                *target = source.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> VisualProps {
        VisualProps::default()
    }

    #[test]
    fn test_translated_moves_and_clips() {
        let clip = Rect::new(0, 0, 20, 10);
        let moved = VisualProps {
            translate_y: 2.0,
            translate_x: -3.0,
            ..props()
        };
        assert_eq!(
            translated(Rect::new(5, 1, 4, 1), &moved, clip),
            Some(Rect::new(2, 3, 4, 1))
        );
        assert_eq!(
            translated(Rect::new(1, 1, 4, 1), &moved, clip),
            Some(Rect::new(0, 3, 2, 1))
        );
        let far = VisualProps {
            translate_y: 50.0,
            ..props()
        };
        assert_eq!(translated(Rect::new(0, 0, 4, 1), &far, clip), None);
    }

    #[test]
    fn test_fraction_of() {
        assert_eq!(fraction_of(10, 0.5), 5);
        assert_eq!(fraction_of(10, 1.5), 10);
        assert_eq!(fraction_of(10, -1.0), 0);
    }

    #[test]
    fn test_text_reveal() {
        let clip = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(clip);
        let half = VisualProps {
            reveal: 0.5,
            ..props()
        };
        assert!(text(&mut buf, clip, 0, 0, "abcdef", Style::default(), &half));
        assert_eq!(buf.cell((2, 0)).map(|c| c.symbol().to_string()), Some("c".into()));
        assert_eq!(buf.cell((3, 0)).map(|c| c.symbol().to_string()), Some(" ".into()));
    }

    #[test]
    fn test_text_shifted_off_left_edge() {
        let clip = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(clip);
        let shifted = VisualProps {
            translate_x: -2.0,
            ..props()
        };
        assert!(text(&mut buf, clip, 0, 0, "abcdef", Style::default(), &shifted));
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol().to_string()), Some("c".into()));
    }

    #[test]
    fn test_invisible_text_skipped() {
        let clip = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(clip);
        let hidden = VisualProps {
            opacity: 0.0,
            ..props()
        };
        assert!(!text(&mut buf, clip, 0, 0, "abc", Style::default(), &hidden));
    }

    #[test]
    fn test_blit_window() {
        let mut canvas = Buffer::empty(Rect::new(0, 0, 4, 10));
        canvas.set_string(0, 5, "row5", Style::default());
        let mut screen = Buffer::empty(Rect::new(0, 0, 4, 2));
        blit(&canvas, 5, &mut screen, Rect::new(0, 0, 4, 2));
        assert_eq!(screen.cell((0, 0)).map(|c| c.symbol().to_string()), Some("r".into()));
    }
}
