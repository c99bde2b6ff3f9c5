//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layout can be unit-tested.

use crate::core::shapes;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CLEARED: Rgb = Rgb::new(200, 40, 40);
const PANEL_W: u16 = 12;

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

/// Renders the board, the side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares the cells in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame (border included), centered with room for the side panel.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let total_w = w + 2 + PANEL_W;
        BoardLayout {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let layout = self.layout(viewport);
        fb.draw_box(
            layout.x,
            layout.y,
            layout.w,
            layout.h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK),
        );

        for y in 0..BOARD_HEIGHT as u16 {
            // Rows removed this frame flash as a solid red bar.
            let cleared = snap.is_cleared_row(y as usize);
            for x in 0..BOARD_WIDTH as u16 {
                match snap.board[y as usize][x as usize] {
                    _ if cleared => self.draw_block(fb, layout, x, y, CLEARED),
                    Some(kind) => self.draw_block(fb, layout, x, y, piece_color(kind)),
                    None => self.draw_empty(fb, layout, x, y),
                }
            }
        }

        if !snap.game_over {
            for (x, y) in snap.active_cells() {
                if (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y) {
                    let color = piece_color(snap.active.kind);
                    self.draw_block(fb, layout, x as u16, y as u16, color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.game_over {
            let mid = layout.y + layout.h / 2;
            let text = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
            fb.put_str_centered(layout.x, mid.saturating_sub(1), layout.w, "GAME OVER", text);
            fb.put_str_centered(
                layout.x,
                mid.saturating_add(1),
                layout.w,
                "r restart  q quit",
                CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: BoardLayout, x: u16, y: u16, fg: Rgb) {
        self.fill_cell(fb, layout, x, y, '█', CellStyle::new(fg, BOARD_BG).bold());
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + 1 + cell_x * self.cell_w;
        let py = layout.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = layout.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let mask = shapes::orientations(snap.next, Rotation::North);
        let style = CellStyle::new(piece_color(snap.next), Rgb::BLACK).bold();
        for (row, cols) in mask.iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if filled {
                    let px = panel_x + col as u16 * 2;
                    fb.put_str(px, y + row as u16, "██", style);
                }
            }
        }
    }
}

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
