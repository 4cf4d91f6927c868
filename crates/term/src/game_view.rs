//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    format_clock, CardId, CardState, Identity, GRID_COLUMNS, GRID_ROWS, PAIR_COUNT,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Second line of the message area once the session is won.
pub const PLAY_AGAIN_HINT: &str = "Press R to play again";

const TABLE_BG: Rgb = Rgb::new(25, 45, 35);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    /// Columns between neighbouring cards.
    gap_x: u16,
    /// Rows between neighbouring cards.
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps cards roughly square with typical glyph aspect ratio.
        Self {
            card_w: 7,
            card_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w,
            card_h,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered table (border and one column/row of padding).
    pub fn frame_size(&self) -> (u16, u16) {
        let cols = GRID_COLUMNS as u16;
        let rows = GRID_ROWS as u16;
        let inner_w = cols * self.card_w + (cols - 1) * self.gap_x;
        let inner_h = rows * self.card_h + (rows - 1) * self.gap_y;
        (inner_w + 4, inner_h + 4)
    }

    /// Top-left terminal cell of a card, relative to the frame origin.
    pub fn card_origin(&self, id: CardId) -> (u16, u16) {
        let col = (id % GRID_COLUMNS as usize) as u16;
        let row = (id / GRID_COLUMNS as usize) as u16;
        (
            2 + col * (self.card_w + self.gap_x),
            2 + row * (self.card_h + self.gap_y),
        )
    }

    /// Frame origin for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `cursor` highlights the card under the cursor.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<CardId>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let table = CellStyle::new(Rgb::new(80, 100, 90), TABLE_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', table);
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for (id, card) in snap.cards.iter().enumerate() {
            let (ox, oy) = self.card_origin(id);
            self.draw_card(fb, start_x + ox, start_y + oy, card.identity(), card.state());
        }

        if let Some(id) = cursor.filter(|&id| id < snap.cards.len()) {
            self.draw_cursor(fb, start_x, start_y, id);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(message) = snap.message() {
            self.draw_message(fb, viewport, start_x, start_y, frame_w, frame_h, &message);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<CardId>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        identity: Identity,
        state: CardState,
    ) {
        let mid_y = y + self.card_h / 2;
        match state {
            CardState::Hidden => {
                let back = CellStyle::new(Rgb::new(190, 170, 120), Rgb::new(60, 50, 35));
                fb.fill_rect(x, y, self.card_w, self.card_h, '░', back);
            }
            CardState::Revealed => {
                let face = CellStyle::new(label_color(identity), identity_color(identity)).bold();
                fb.fill_rect(x, y, self.card_w, self.card_h, ' ', face);
                self.put_centered(fb, x, mid_y, identity_label(identity), face);
            }
            CardState::Matched => {
                let bg = identity_color(identity).scaled(1, 2);
                let face = CellStyle::new(label_color(identity), bg).dim();
                fb.fill_rect(x, y, self.card_w, self.card_h, ' ', face);
                self.put_centered(fb, x, mid_y, identity_label(identity), face);
                if self.card_h >= 3 {
                    self.put_centered(fb, x, y + self.card_h - 1, "✓", face);
                }
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, x: u16, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let cx = x + self.card_w.saturating_sub(text_w) / 2;
        fb.put_str(cx, y, text, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, id: CardId) {
        let (ox, oy) = self.card_origin(id);
        let x = start_x + ox;
        let y = start_y + oy + self.card_h / 2;
        let marker = CellStyle::new(Rgb::new(255, 255, 255), TABLE_BG).bold();
        fb.put_char(x - 1, y, '▸', marker);
        fb.put_char(x + self.card_w, y, '◂', marker);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, format_clock(snap.elapsed_seconds).as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.matched_pairs, value);
        let digits = if snap.matched_pairs >= 10 { 2 } else { 1 };
        fb.put_char(panel_x + digits, y, '/', value);
        fb.put_u32(panel_x + digits + 1, y, PAIR_COUNT as u32, value);
        y = y.saturating_add(2);

        for line in ["SPACE flip", "R restart", "Q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Message area below the table; overlaid on it when there is no room.
    #[allow(clippy::too_many_arguments)]
    fn draw_message(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        message: &str,
    ) {
        let below = start_y.saturating_add(frame_h);
        let y = if below.saturating_add(1) < viewport.height {
            below
        } else {
            start_y.saturating_add(frame_h / 2).saturating_sub(1)
        };

        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        for (i, line) in [message, PLAY_AGAIN_HINT].iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, y.saturating_add(i as u16), line, style);
        }
    }
}

pub fn identity_color(identity: Identity) -> Rgb {
    match identity {
        Identity::Black => Rgb::new(45, 45, 50),
        Identity::Blue => Rgb::new(40, 80, 200),
        Identity::Red => Rgb::new(210, 50, 50),
        Identity::Green => Rgb::new(60, 170, 70),
        Identity::LtBlue => Rgb::new(120, 200, 240),
        Identity::Melon => Rgb::new(250, 170, 120),
        Identity::Pink => Rgb::new(240, 130, 190),
        Identity::Yellow => Rgb::new(240, 220, 70),
    }
}

fn label_color(identity: Identity) -> Rgb {
    match identity {
        Identity::Black | Identity::Blue | Identity::Red | Identity::Green => {
            Rgb::new(245, 245, 245)
        }
        _ => Rgb::new(20, 20, 20),
    }
}

pub fn identity_label(identity: Identity) -> &'static str {
    match identity {
        Identity::Black => "BLK",
        Identity::Blue => "BLU",
        Identity::Red => "RED",
        Identity::Green => "GRN",
        Identity::LtBlue => "LBL",
        Identity::Melon => "MEL",
        Identity::Pink => "PNK",
        Identity::Yellow => "YEL",
    }
}
