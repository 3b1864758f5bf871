//! GameView: maps `core::RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RoundSnapshot, ScoreEntry, ScoreLedger};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardSize, RoundPhase, TileId};

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

/// A lightweight terminal renderer for the card board.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    /// Spacing between cards.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 cards read well at typical terminal glyph aspect ratios.
        Self {
            card_w: 6,
            card_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16, gap: u16) -> Self {
        Self { card_w, card_h, gap }
    }

    /// Render the round into an existing framebuffer.
    ///
    /// `cursor` is the tile the selection cursor sits on; `scores` is the
    /// ranked list for the round's board size (best first).
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        cursor: TileId,
        scores: &[ScoreEntry],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = snap.size.grid_columns() as u16;
        let rows = snap.size.grid_rows() as u16;
        let board_px_w = cols * self.card_w + cols.saturating_sub(1) * self.gap;
        let board_px_h = rows * self.card_h + rows.saturating_sub(1) * self.gap;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Title and move counter above the board.
        let title = CellStyle {
            fg: Rgb::new(120, 200, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(start_x, start_y.saturating_sub(1), "MEMORY", title);
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let moves_x = start_x + frame_w.saturating_sub(12);
        fb.put_str(moves_x, start_y.saturating_sub(1), "MOVES", label);
        fb.put_u32(moves_x + 6, start_y.saturating_sub(1), snap.moves, label);

        // Cards.
        for tile in &snap.tiles {
            let col = (tile.id as u16) % cols;
            let row = (tile.id as u16) / cols;
            let px = start_x + 1 + col * (self.card_w + self.gap);
            let py = start_y + 1 + row * (self.card_h + self.gap);
            self.draw_card(fb, px, py, snap, tile.id, tile.id == cursor);
        }

        self.draw_side_panel(fb, snap, scores, viewport, start_x, start_y, frame_w);
        self.draw_status_line(fb, snap, viewport, start_x, start_y, frame_h);

        if snap.complete() {
            self.draw_win_overlay(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        cursor: TileId,
        scores: &[ScoreEntry],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, scores, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        snap: &RoundSnapshot,
        id: TileId,
        under_cursor: bool,
    ) {
        let tile = &snap.tiles[id];

        let (fill, style) = if tile.matched {
            (
                ' ',
                CellStyle {
                    fg: Rgb::new(110, 220, 140),
                    bg: Rgb::new(20, 45, 30),
                    bold: false,
                    dim: true,
                },
            )
        } else if tile.face_up {
            (
                ' ',
                CellStyle {
                    fg: Rgb::new(250, 250, 250),
                    bg: Rgb::new(60, 60, 90),
                    bold: true,
                    dim: false,
                },
            )
        } else {
            (
                '░',
                CellStyle {
                    fg: Rgb::new(70, 90, 140),
                    bg: Rgb::new(25, 30, 55),
                    bold: false,
                    dim: false,
                },
            )
        };

        let style = if under_cursor && !snap.complete() {
            CellStyle {
                bg: Rgb::new(
                    style.bg.r.saturating_add(50),
                    style.bg.g.saturating_add(50),
                    style.bg.b.saturating_add(30),
                ),
                bold: true,
                ..style
            }
        } else {
            style
        };

        fb.fill_rect(px, py, self.card_w, self.card_h, fill, style);

        let glyph = if tile.face_up {
            card_glyph(&snap.images, tile.pair)
        } else {
            '?'
        };
        fb.put_char(px + self.card_w / 2, py + self.card_h / 2, glyph, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        scores: &[ScoreEntry],
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.size.label(), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.size.difficulty(), dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TOP SCORES", label);
        y = y.saturating_add(1);
        if scores.is_empty() {
            fb.put_str(panel_x, y, "none yet", dim);
            return;
        }
        for (rank, entry) in scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let style = if rank == 0 {
                CellStyle {
                    fg: Rgb::new(240, 210, 90),
                    bold: true,
                    ..value
                }
            } else {
                value
            };
            fb.put_u32(panel_x, y, (rank as u32) + 1, dim);
            fb.put_char(panel_x + 2, y, '.', dim);
            fb.put_u32(panel_x + 4, y, entry.moves, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_h: u16,
    ) {
        let y = start_y.saturating_add(frame_h);
        if y >= viewport.height {
            return;
        }
        let dim = CellStyle {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        if snap.phase == RoundPhase::Resolving {
            // Show the settle countdown in tenths of a second.
            let tenths = (snap.settle_remaining_ms + 99) / 100;
            fb.put_str(start_x, y, "no match - wait ", dim);
            fb.put_u32(start_x + 16, y, tenths / 10, dim);
            fb.put_char(start_x + 17, y, '.', dim);
            fb.put_u32(start_x + 18, y, tenths % 10, dim);
            fb.put_char(start_x + 19, y, 's', dim);
        } else {
            fb.put_str(start_x, y, "arrows move  space flip  r new  m menu  q quit", dim);
        }
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let text = "YOU WON!";
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, style);

        let sub_y = mid_y.saturating_add(1);
        fb.put_str(x.saturating_sub(2), sub_y, "moves: ", style);
        fb.put_u32(x.saturating_add(5), sub_y, snap.moves, style);
    }
}

/// MenuView: the setup screen (board-size catalog + per-size best scores).
pub struct MenuView;

impl MenuView {
    pub fn render_into(
        &self,
        selected: BoardSize,
        ledger: &ScoreLedger,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let title = CellStyle {
            fg: Rgb::new(120, 200, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::default();
        let dim = CellStyle { dim: true, ..value };
        let highlight = CellStyle {
            fg: Rgb::new(240, 210, 90),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let menu_w: u16 = 34;
        let x = viewport.width.saturating_sub(menu_w) / 2;
        let mut y = viewport.height.saturating_sub(12) / 2;

        fb.put_str(x, y, "MEMORY", title);
        y = y.saturating_add(1);
        fb.put_str(x, y, "match every pair of cards", dim);
        y = y.saturating_add(2);

        for (i, size) in BoardSize::ALL.iter().enumerate() {
            let style = if *size == selected { highlight } else { value };
            fb.put_u32(x, y, (i as u32) + 1, style);
            fb.put_char(x + 1, y, '.', style);
            fb.put_str(x + 3, y, size.label(), style);
            fb.put_str(x + 13, y, size.difficulty(), dim);
            if let Some(best) = ledger.best(*size) {
                fb.put_str(x + 21, y, "best", dim);
                fb.put_u32(x + 26, y, best.moves, style);
            }
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        fb.put_str(x, y, "1-4 play  x reset scores  q quit", dim);
    }

    pub fn render(
        &self,
        selected: BoardSize,
        ledger: &ScoreLedger,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(selected, ledger, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Face glyph for a pair: single-character identifiers (the built-in emoji
/// deck) show themselves; anything longer falls back to a letter per pair so
/// opaque identifiers like file paths stay distinguishable.
fn card_glyph(images: &[String], pair: usize) -> char {
    match images.get(pair) {
        Some(image) => {
            let mut chars = image.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => (b'A' + (pair % 26) as u8) as char,
            }
        }
        None => '?',
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
