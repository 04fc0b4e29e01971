//! Meteor shooter scene: the grid drawn one glyph per cell, two columns
//! wide per cell so the field is not absurdly narrow in a terminal font.

use ratatui::{
    layout::Rect,
    style::Color,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::arcade::shooter::types::{ShooterGame, GRID_HEIGHT, GRID_WIDTH, PLAYER_ROW};
use crate::ui::game_common::{
    cells_to_line, create_game_layout, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, Cell,
};

const SHIP_CHAR: char = '▲';
const BULLET_CHAR: char = '↑';
const METEOR_CHAR: char = '●';
const LOOT_CHAR: char = '$';

/// Horizontal stretch: each grid cell renders as this many columns.
const CELL_WIDTH: usize = 2;

pub fn render_shooter_scene(frame: &mut Frame, area: Rect, game: &ShooterGame, best: u32) {
    let layout = create_game_layout(
        frame,
        area,
        " Meteor Shooter ",
        Color::LightMagenta,
        GRID_HEIGHT as u16,
        18,
    );

    render_grid(frame, layout.content, game);

    let status = format!("Score {}", game.score);
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::White,
        &[
            ("A/D", "move"),
            ("Space", "fire"),
            ("Esc", "leave"),
        ],
    );

    render_info_panel(frame, layout.info_panel, game, best);

    if game.game_over {
        let is_new_best = game.score > best;
        render_game_over_overlay(frame, layout.content, game.score, best, is_new_best);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let height = (area.height as usize).min(GRID_HEIGHT as usize);
    let width = (area.width as usize).min(GRID_WIDTH as usize * CELL_WIDTH);
    if height < 4 || width < 8 {
        return;
    }
    let mut buffer = vec![vec![Cell::blank(); width]; height];

    let mut put = |x: i16, y: i16, ch: char, fg: Color| {
        if x < 0 || y < 0 {
            return;
        }
        let col = x as usize * CELL_WIDTH;
        let row = y as usize;
        if row < height && col < width {
            buffer[row][col] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    };

    for piece in &game.loot {
        put(piece.x, piece.y, LOOT_CHAR, Color::Green);
    }
    for bullet in &game.bullets {
        put(bullet.x, bullet.y, BULLET_CHAR, Color::Yellow);
    }
    for meteor in &game.meteorites {
        put(meteor.x, meteor.y, METEOR_CHAR, Color::Red);
    }
    let ship_color = if game.game_over { Color::Red } else { Color::Cyan };
    put(game.player_x, PLAYER_ROW, SHIP_CHAR, ship_color);

    let lines: Vec<Line> = buffer.iter().map(|row| cells_to_line(row)).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ShooterGame, best: u32) {
    use ratatui::style::Style;
    use ratatui::text::Span;

    let inner = render_info_panel_frame(frame, area, " Arcade ");
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("Meteor Shooter", Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best  ", dim),
            Span::styled(format!("{best}"), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Score ", dim),
            Span::styled(format!("{}", game.score), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{METEOR_CHAR} "), Style::default().fg(Color::Red)),
            Span::styled("shoot these", dim),
        ]),
        Line::from(vec![
            Span::styled(format!("{LOOT_CHAR} "), Style::default().fg(Color::Green)),
            Span::styled("catch these", dim),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
