use frametris::core::{GameSnapshot, GameState, SequencePieces};
use frametris::term::{FrameBuffer, GameView, Rgb, Viewport};
use frametris::types::PieceKind;

fn snapshot() -> GameSnapshot {
    GameState::with_source(SequencePieces::new([PieceKind::T, PieceKind::I])).snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10 cells x 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snapshot(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = snapshot();
    snap.board[19][0] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1).
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(22, 22));

    // T at spawn covers (4, 0): columns 1 + 4 * 2 = 9..=10, row 1.
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(10, 1).unwrap().ch, '█');
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 17;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    for word in ["SCORE", "1234", "LEVEL", "LINES", "17", "NEXT"] {
        assert!(all.contains(word), "missing {}", word);
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_previews_next_piece() {
    let view = GameView::default();
    let vp = Viewport::new(60, 22);
    let fb = view.render(&snapshot(), vp);

    // Board frame at x = 12, panel at x = 36. NEXT label on row 9, mask rows 10..=13.
    // The I preview fills mask row 2 -> screen row 12, 4 cells x 2 columns.
    let layout = view.layout(vp);
    assert_eq!(layout.x, 12);
    for x in 36..44 {
        assert_eq!(fb.get(x, 12).unwrap().ch, '█', "column {}", x);
    }
    assert_eq!(fb.get(36, 11).unwrap().ch, ' ');
}

#[test]
fn term_view_paints_cleared_rows_red() {
    let mut snap = snapshot();
    snap.cleared_rows.push(19);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let glyph = fb.get(1, 20).unwrap();
    assert_eq!(glyph.ch, '█');
    assert_eq!(glyph.style.fg, Rgb::new(200, 40, 40));
    assert_ne!(fb.get(1, 19).unwrap().style.fg, Rgb::new(200, 40, 40));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = snapshot();
    snap.game_over = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    // The active piece is hidden once the game has ended.
    assert_eq!(fb.get(9, 1).unwrap().ch, '·');
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(22, 30));
    // (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snapshot(), Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
}
