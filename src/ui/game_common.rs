//! Shared UI chrome for the arcade games.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by [`create_game_layout`].
pub struct GameLayout {
    /// Main play field, top left inside the outer border.
    pub content: Rect,
    /// Two-line status bar under the play field.
    pub status_bar: Rect,
    /// Info panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Carve the standard arcade layout out of `area`:
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar, 2 lines]           │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(columns[0]);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    }
}

/// Two-line status bar: a centered status message over a centered
/// `(key, action)` controls strip.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let strip = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            strip,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Current frame of the braille spinner (100 ms per frame, wall clock).
pub fn spinner_char() -> char {
    use std::time::{SystemTime, UNIX_EPOCH};

    const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    FRAMES[((millis / 100) % 10) as usize]
}

/// Bordered side panel. Returns the inner rect for content.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Centered game-over modal over the frozen play field.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    score: u32,
    best: u32,
    is_new_best: bool,
) {
    let modal_width = 34u16.min(area.width);
    let modal_height = 9u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal);

    let accent = if is_new_best { Color::Yellow } else { Color::Red };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let best_line = if is_new_best {
        Line::from(Span::styled(
            "New best score!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Best   {best}"),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score  {score}"),
            Style::default().fg(Color::White),
        )),
        best_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::White)),
            Span::styled(" Play again   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::White)),
            Span::styled(" Leave", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// One cell of a play-field buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Merge one buffer row into a line of spans, run-length grouped by style
/// so a 64-cell row does not become 64 one-char spans.
pub fn cells_to_line(row: &[Cell]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut current: Option<(Color, Color)> = None;

    for cell in row {
        let style = (cell.fg, cell.bg);
        match current {
            Some(active) if active == style => run.push(cell.ch),
            Some((fg, bg)) => {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(fg).bg(bg),
                ));
                run.push(cell.ch);
                current = Some(style);
            }
            None => {
                run.push(cell.ch);
                current = Some(style);
            }
        }
    }
    if let Some((fg, bg)) = current {
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(fg).bg(bg)));
        }
    }
    Line::from(spans)
}
