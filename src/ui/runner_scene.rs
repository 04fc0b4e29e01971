//! Endless runner scene.
//!
//! The play field is drawn into a cell buffer (one styled cell per grid
//! position) and stamped row by row, which keeps per-character color
//! control without a span per character.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::arcade::runner::types::{
    ObstacleKind, RunnerGame, FIELD_HEIGHT, FIELD_WIDTH, GROUND_ROW, HIGH_BAND_ROW,
    NOTICE_LIFE_FRAMES, PLAYER_COL, PLAYER_WIDTH,
};
use crate::ui::game_common::{
    cells_to_line, create_game_layout, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, Cell,
};

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';

pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, best: u32) {
    let layout = create_game_layout(frame, area, " Runner ", Color::LightYellow, FIELD_HEIGHT, 18);

    render_play_field(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content);
    }

    let status = format!("Score {}   Speed {:.2}", game.score, game.scroll_speed);
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::White,
        &[
            ("Space/W", "jump"),
            ("S", "duck"),
            ("Esc", "leave"),
        ],
    );

    render_info_panel(frame, layout.info_panel, game, best);

    if game.game_over {
        let is_new_best = game.score > best;
        render_game_over_overlay(frame, layout.content, game.score, best, is_new_best);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 4 || area.width < 12 {
        return;
    }

    let height = area.height.min(FIELD_HEIGHT) as usize;
    let width = area.width.min(FIELD_WIDTH) as usize;
    let mut buffer = vec![vec![Cell::blank(); width]; height];

    draw_ground(&mut buffer, game, width, height);
    draw_obstacles(&mut buffer, game, width, height);
    draw_player(&mut buffer, game, width, height);
    draw_notices(&mut buffer, game, width);

    let lines: Vec<Line> = buffer.iter().map(|row| cells_to_line(row)).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_ground(buffer: &mut [Vec<Cell>], game: &RunnerGame, width: usize, height: usize) {
    let surface = GROUND_ROW as usize + 1;
    if surface >= height {
        return;
    }
    // Scroll the surface texture with the world so motion reads even on an
    // empty field
    let shift = (game.tick_count as f64 * game.scroll_speed) as usize;
    for x in 0..width {
        let ch = if (x + shift) % 7 == 0 { GROUND_SUB } else { GROUND_CHAR };
        buffer[surface][x] = Cell {
            ch,
            fg: Color::Rgb(110, 90, 60),
            bg: Color::Reset,
        };
    }
    for row in buffer.iter_mut().take(height).skip(surface + 1) {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: GROUND_SUB,
                fg: Color::Rgb(70, 58, 40),
                bg: Color::Reset,
            };
        }
    }
}

fn draw_obstacles(buffer: &mut [Vec<Cell>], game: &RunnerGame, width: usize, height: usize) {
    for obs in &game.obstacles {
        let (bottom, ch, fg) = match obs.kind {
            ObstacleKind::Low => (GROUND_ROW as usize, '▟', Color::Red),
            ObstacleKind::High => (HIGH_BAND_ROW as usize, '▒', Color::Magenta),
        };
        let top = bottom.saturating_sub(obs.height as usize - 1);
        for col in 0..obs.width {
            let x = obs.x + col as f64;
            if x < 0.0 || x >= width as f64 {
                continue;
            }
            for y in top..=bottom.min(height - 1) {
                buffer[y][x as usize] = Cell {
                    ch,
                    fg,
                    bg: Color::Reset,
                };
            }
        }
    }
}

fn draw_player(buffer: &mut [Vec<Cell>], game: &RunnerGame, width: usize, height: usize) {
    let feet = (game.player_y.round() as usize).min(height.saturating_sub(1));
    let top = feet.saturating_sub(game.hitbox_height() as usize - 1);
    let fg = if game.game_over { Color::Red } else { Color::Cyan };

    for x in PLAYER_COL as usize..(PLAYER_COL + PLAYER_WIDTH) as usize {
        if x >= width {
            break;
        }
        for y in top..=feet {
            // Legs alternate while running, everything else is solid body
            let ch = if y == feet && !game.is_airborne() && game.run_anim_frame == 1 {
                '▙'
            } else {
                '█'
            };
            buffer[y][x] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }
}

/// Scaling notices dim as their life runs out.
fn draw_notices(buffer: &mut [Vec<Cell>], game: &RunnerGame, width: usize) {
    for (i, notice) in game.notices.iter().enumerate() {
        let row = 1 + i;
        if row >= buffer.len() {
            break;
        }
        let fg = match notice.life {
            life if life > NOTICE_LIFE_FRAMES * 2 / 3 => Color::Yellow,
            life if life > NOTICE_LIFE_FRAMES / 3 => Color::Gray,
            _ => Color::DarkGray,
        };
        let start = width.saturating_sub(notice.label.len()) / 2;
        for (j, ch) in notice.label.chars().enumerate() {
            if start + j < width {
                buffer[row][start + j] = Cell {
                    ch,
                    fg,
                    bg: Color::Reset,
                };
            }
        }
    }
}

fn render_start_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to run", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    let centered = Rect {
        y: area.y + area.height / 3,
        height: 1,
        ..area
    };
    frame.render_widget(prompt, centered);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame, best: u32) {
    let inner = render_info_panel_frame(frame, area, " Arcade ");
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("Endless Runner", Style::default().fg(Color::White))),
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
        Line::from(Span::styled("Jump the red,", dim)),
        Line::from(Span::styled("duck the purple.", dim)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
