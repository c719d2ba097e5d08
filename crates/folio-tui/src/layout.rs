//! Document layout in terminal rows
//!
//! Every block gets a document-relative position; the scroll offset decides
//! which rows end up on screen.

use folio_core::content::PortfolioContent;
use folio_core::section::SectionBounds;
use ratatui::layout::Rect;

const MARQUEE_HEIGHT: u16 = 5;
const HEADER_HEIGHT: u16 = 4;
const CARD_ROW_HEIGHT: u16 = 5;
const GRID_COLUMNS: u16 = 12;
const SIDE_MARGIN: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    Marquee,
    Work,
    Skills,
    Contact,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Hero,
        BlockKind::Marquee,
        BlockKind::Work,
        BlockKind::Skills,
        BlockKind::Contact,
    ];

    /// Navigation section id; the marquee is not a section
    pub fn section_id(self) -> Option<&'static str> {
        match self {
            BlockKind::Hero => Some("hero"),
            BlockKind::Marquee => None,
            BlockKind::Work => Some("work"),
            BlockKind::Skills => Some("skills"),
            BlockKind::Contact => Some("contact"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub top: u16,
    pub height: u16,
}

impl Block {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn bounds(&self) -> SectionBounds {
        SectionBounds::from_height(f64::from(self.top), f64::from(self.height))
    }

    /// Document rect of the block across the full width
    pub fn rect(&self, width: u16) -> Rect {
        Rect::new(0, self.top, width, self.height)
    }

    /// Row of the section heading
    pub fn heading_row(&self) -> u16 {
        self.top.saturating_add(1)
    }

    /// Row of the divider under the heading
    pub fn divider_row(&self) -> u16 {
        self.top.saturating_add(2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    pub mobile: bool,
    pub blocks: Vec<Block>,
    /// Document rects of the project cards, in content order
    pub cards: Vec<Rect>,
    /// Document rows of the skill bars
    pub skill_rows: Vec<u16>,
    /// Document rows of the contact lines (email first, then socials)
    pub contact_rows: Vec<u16>,
    pub document_height: u16,
}

impl PageLayout {
    pub fn compute(
        width: u16,
        viewport_height: u16,
        content: &PortfolioContent,
        mobile_breakpoint: u16,
    ) -> Self {
        let mobile = width < mobile_breakpoint;
        let mut blocks = Vec::with_capacity(BlockKind::ALL.len());
        let mut top = 0u16;

        let hero = Block {
            kind: BlockKind::Hero,
            top,
            height: viewport_height.max(12),
        };
        top = hero.bottom();
        blocks.push(hero);

        let marquee = Block {
            kind: BlockKind::Marquee,
            top,
            height: MARQUEE_HEIGHT,
        };
        top = marquee.bottom();
        blocks.push(marquee);

        let grid_top = top.saturating_add(HEADER_HEIGHT);
        let (cards, grid_height) = layout_cards(content, width, grid_top, mobile);
        let work = Block {
            kind: BlockKind::Work,
            top,
            height: grid_height.saturating_add(HEADER_HEIGHT + 2),
        };
        top = work.bottom();
        blocks.push(work);

        let skill_count = count(content.skills.len());
        let skill_rows: Vec<u16> = (0..skill_count)
            .map(|i| top.saturating_add(HEADER_HEIGHT).saturating_add(i.saturating_mul(2)))
            .collect();
        let skills = Block {
            kind: BlockKind::Skills,
            top,
            height: skill_count.saturating_mul(2).saturating_add(HEADER_HEIGHT + 2),
        };
        top = skills.bottom();
        blocks.push(skills);

        let social_count = count(content.socials.len());
        let contact_rows: Vec<u16> = (0..=social_count)
            .map(|i| top.saturating_add(HEADER_HEIGHT + 2).saturating_add(i.saturating_mul(2)))
            .collect();
        let contact = Block {
            kind: BlockKind::Contact,
            top,
            height: viewport_height.max(social_count.saturating_mul(2).saturating_add(HEADER_HEIGHT + 6)),
        };
        top = contact.bottom();
        blocks.push(contact);

        Self {
            width,
            viewport_height,
            mobile,
            blocks,
            cards,
            skill_rows,
            contact_rows,
            document_height: top,
        }
    }

    pub fn block(&self, kind: BlockKind) -> Option<&Block> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    pub fn bounds_of(&self, kind: BlockKind) -> SectionBounds {
        self.block(kind)
            .map(Block::bounds)
            .unwrap_or_default()
    }

    /// Document area left and right of the content margin
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(SIDE_MARGIN * 2)
    }

    pub fn margin(&self) -> u16 {
        SIDE_MARGIN
    }
}

/// Single-row bounds at a document row
pub fn row_bounds(row: u16) -> SectionBounds {
    SectionBounds::from_height(f64::from(row), 1.0)
}

pub fn rect_bounds(rect: Rect) -> SectionBounds {
    SectionBounds::from_height(f64::from(rect.y), f64::from(rect.height))
}

/// Item count as rows, saturating past what a terminal can address
fn count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// Pack cards on a 12-column grid, one full-width column on mobile
fn layout_cards(content: &PortfolioContent, width: u16, top: u16, mobile: bool) -> (Vec<Rect>, u16) {
    let inner = width.saturating_sub(SIDE_MARGIN * 2);
    let cell = (inner / GRID_COLUMNS).max(1);
    let mut cards = Vec::with_capacity(content.projects.len());
    let mut column = 0u16;
    let mut row_top = top;
    let mut row_height = 0u16;

    for project in &content.projects {
        let height = CARD_ROW_HEIGHT * u16::from(project.span.row.max(1));
        if mobile {
            cards.push(Rect::new(SIDE_MARGIN, row_top, inner, height));
            row_top = row_top.saturating_add(height).saturating_add(1);
            continue;
        }

        let span = u16::from(project.span.col).clamp(1, GRID_COLUMNS);
        if column + span > GRID_COLUMNS {
            row_top = row_top.saturating_add(row_height).saturating_add(1);
            column = 0;
            row_height = 0;
        }
        let x = SIDE_MARGIN + column * cell;
        let w = (span * cell).saturating_sub(1).max(1);
        cards.push(Rect::new(x, row_top, w, height));
        column += span;
        row_height = row_height.max(height);
    }

    let bottom = if mobile { row_top } else { row_top.saturating_add(row_height) };
    (cards, bottom.saturating_sub(top))
}
