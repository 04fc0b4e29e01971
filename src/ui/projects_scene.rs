//! Projects gallery scene: repo list on the left, details on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::github::Project;
use crate::api::DataSource;
use crate::projects::ProjectsScreen;
use crate::ui::game_common::spinner_char;

pub fn render_projects_scene(frame: &mut Frame, area: Rect, screen: &ProjectsScreen) {
    let title = format!(" Projects [{}] ", screen.source.label());
    let border = match screen.source {
        DataSource::Live => Color::Green,
        DataSource::Cached => Color::Yellow,
        DataSource::Sample => Color::DarkGray,
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if screen.is_loading() {
        render_loading(frame, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    render_repo_list(frame, columns[0], screen);
    render_detail(frame, columns[1], screen.selected_project());
    render_footer(frame, rows[1]);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(format!("{} fetching repositories...", spinner_char()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    let centered = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(text, centered);
}

fn render_repo_list(frame: &mut Frame, area: Rect, screen: &ProjectsScreen) {
    let visible = area.height as usize;
    // Keep the cursor inside the window
    let first = screen.selected.saturating_sub(visible.saturating_sub(1));

    let mut lines = Vec::new();
    for (i, project) in screen.projects.iter().enumerate().skip(first).take(visible) {
        let selected = i == screen.selected;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", project.name),
            style,
        )));
    }
    if screen.projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no repositories",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail(frame: &mut Frame, area: Rect, project: Option<&Project>) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(project) = project else {
        return;
    };

    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", project.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", project.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" lang    ", dim),
            Span::styled(&project.language, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" stars   ", dim),
            Span::styled(
                format!("★ {}", project.stars),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" forks   ", dim),
            Span::styled(format!("{}", project.forks), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(" updated ", dim),
            Span::styled(&project.updated, Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", project.url),
            Style::default().fg(Color::Blue),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keys = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::White)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("R", Style::default().fg(Color::White)),
        Span::styled(" refresh  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::White)),
        Span::styled(" back", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(keys).alignment(Alignment::Center), area);
}
