use std::fmt::Write;

use sweeper_core::{CellView, Phase, RenderView};

fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::RevealedEmpty => '.',
        CellView::RevealedNumber(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::RevealedMine => '*',
    }
}

fn status(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "playing",
        Phase::Won => "you won!",
        Phase::Lost => "boom, you lost",
    }
}

/// Draws the board as text, columns left to right and rows top to bottom.
pub fn render_text(view: &RenderView) -> String {
    let width = view.side.saturating_sub(1).to_string().len();
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(out, "mines left: {}  [{}]", view.mines_left, status(view.phase));
    let _ = write!(out, "{:width$}", "");
    for x in 0..view.side {
        let _ = write!(out, " {x:>width$}");
    }
    out.push('\n');

    for y in 0..view.side {
        let _ = write!(out, "{y:>width$}");
        for cell in view.row(y) {
            let _ = write!(out, " {:>width$}", symbol(cell));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Game, Grid};

    #[test]
    fn renders_each_display_tag() {
        let grid = Grid::from_mine_coords(3, &[(0, 0), (2, 0)]).unwrap();
        let mut game = Game::with_grid(grid, 0);
        game.on_reveal((1, 0));
        game.on_toggle_flag((2, 0));

        let text = render_text(&game.render_view());

        assert_eq!(
            text,
            "mines left: 1  [playing]\n  0 1 2\n0 # 2 F\n1 # # #\n2 # # #\n"
        );
    }

    #[test]
    fn renders_flooded_area() {
        let grid = Grid::from_mine_coords(3, &[(0, 0)]).unwrap();
        let mut game = Game::with_grid(grid, 0);
        game.on_reveal((2, 2));

        let text = render_text(&game.render_view());

        assert_eq!(
            text,
            "mines left: 1  [you won!]\n  0 1 2\n0 # 1 .\n1 1 1 .\n2 . . .\n"
        );
    }

    #[test]
    fn pads_wide_boards() {
        let game = Game::with_grid(Grid::from_mine_coords(11, &[]).unwrap(), 0);

        let text = render_text(&game.render_view());
        let mut lines = text.lines().skip(1);

        assert!(lines.next().unwrap().ends_with(" 9 10"));
        assert!(lines.next().unwrap().starts_with(" 0  #  #"));
    }

    #[test]
    fn shows_lost_mine() {
        let grid = Grid::from_mine_coords(2, &[(1, 1)]).unwrap();
        let mut game = Game::with_grid(grid, 0);
        game.on_reveal((1, 1));

        let text = render_text(&game.render_view());

        assert!(text.starts_with("mines left: 1  [boom, you lost]"));
        assert!(text.ends_with("1 # *\n"));
    }
}
