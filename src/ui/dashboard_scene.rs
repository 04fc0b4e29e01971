//! Data dashboard scene: Location / Weather / Rates behind a tab strip.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::api::weather::{describe, glyph};
use crate::api::DataSource;
use crate::dashboard::{DashboardData, DashboardScreen, DashboardTab};
use crate::ui::game_common::spinner_char;

pub fn render_dashboard_scene(frame: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let titles: Vec<Line> = DashboardTab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();
    let selected = DashboardTab::ALL
        .iter()
        .position(|tab| *tab == screen.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, rows[0]);

    match &screen.data {
        None => render_loading(frame, rows[1]),
        Some(data) => render_panel(frame, rows[1], screen.tab, data),
    }

    render_footer(frame, rows[2], screen.is_loading());
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(format!("{} loading panels...", spinner_char()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    let centered = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(text, centered);
}

fn render_panel(frame: &mut Frame, area: Rect, tab: DashboardTab, data: &DashboardData) {
    let lines = match tab {
        DashboardTab::Location => location_lines(data),
        DashboardTab::Weather => weather_lines(data),
        DashboardTab::Rates => rates_lines(data),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<10}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn source_line(source: DataSource) -> Line<'static> {
    let color = match source {
        DataSource::Live => Color::Green,
        DataSource::Cached => Color::Yellow,
        DataSource::Sample => Color::DarkGray,
    };
    Line::from(Span::styled(
        format!(" data: {}", source.label()),
        Style::default().fg(color),
    ))
}

fn location_lines(data: &DashboardData) -> Vec<Line<'static>> {
    let (fix, source) = &data.geo;
    vec![
        Line::from(""),
        field("city", fix.city.clone()),
        field("country", fix.country.clone()),
        field("timezone", fix.timezone.clone()),
        field("coords", format!("{:.3}, {:.3}", fix.lat, fix.lon)),
        field("ip", fix.ip.clone()),
        Line::from(""),
        source_line(*source),
    ]
}

fn weather_lines(data: &DashboardData) -> Vec<Line<'static>> {
    let (report, source) = &data.weather;
    let (fix, _) = &data.geo;
    vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{} {}", glyph(report.code, report.is_day), describe(report.code)),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", fix.city),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        field("temp", format!("{:.1} °C", report.temperature_c)),
        field("wind", format!("{:.0} km/h", report.windspeed_kmh)),
        field(
            "period",
            if report.is_day { "day" } else { "night" }.to_string(),
        ),
        Line::from(""),
        source_line(*source),
    ]
}

fn rates_lines(data: &DashboardData) -> Vec<Line<'static>> {
    let (table, source) = &data.rates;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" 1 {} buys ({})", table.base, table.date),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (code, rate) in &table.rates {
        lines.push(Line::from(vec![
            Span::styled(format!("   {code:<5}"), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{rate:>10.4}"), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(source_line(*source));
    lines
}

fn render_footer(frame: &mut Frame, area: Rect, loading: bool) {
    let mut spans = vec![
        Span::styled("Tab/←→", Style::default().fg(Color::White)),
        Span::styled(" switch  ", Style::default().fg(Color::DarkGray)),
        Span::styled("R", Style::default().fg(Color::White)),
        Span::styled(" refresh  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::White)),
        Span::styled(" back", Style::default().fg(Color::DarkGray)),
    ];
    if loading {
        spans.push(Span::styled(
            format!("  {}", spinner_char()),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
