//! The command session scene: scrollback above a live prompt.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::terminal::session::{LineKind, SessionLine, TerminalSession};

pub const PROMPT: &str = "visitor@folio:~$ ";

/// Render the terminal screen. Scrollback is bottom-anchored: the newest
/// lines sit just above the prompt, older ones fall off the top.
pub fn render_terminal_scene(frame: &mut Frame, area: Rect, session: &TerminalSession) {
    let block = Block::default()
        .title(" folio ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Last row is the prompt, the rest is scrollback
    let history_height = (inner.height - 1) as usize;
    let skip = session.lines.len().saturating_sub(history_height);

    let mut lines: Vec<Line> = Vec::with_capacity(history_height + 1);
    for entry in session.lines.iter().skip(skip) {
        lines.push(scrollback_line(entry));
    }

    let filled = lines.len();
    lines.push(prompt_line(session));

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);

    // Hardware cursor on the prompt, clamped to the frame edge
    let prompt_cols = PROMPT.chars().count() + session.cursor;
    let cursor_x = (inner.x + prompt_cols as u16).min(inner.x + inner.width.saturating_sub(1));
    let cursor_y = inner.y + filled as u16;
    frame.set_cursor(cursor_x, cursor_y);
}

fn scrollback_line(entry: &SessionLine) -> Line<'_> {
    match entry.kind {
        LineKind::Command => Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Green)),
            Span::styled(&entry.text, Style::default().fg(Color::White)),
        ]),
        LineKind::Output => Line::from(Span::styled(
            &entry.text,
            Style::default().fg(Color::Gray),
        )),
        LineKind::Error => Line::from(Span::styled(&entry.text, Style::default().fg(Color::Red))),
        LineKind::System => Line::from(Span::styled(
            &entry.text,
            Style::default().fg(Color::Cyan),
        )),
    }
}

fn prompt_line(session: &TerminalSession) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(&session.input, Style::default().fg(Color::White)),
    ])
}
