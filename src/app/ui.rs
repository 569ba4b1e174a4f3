use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::Decimal;

use super::utils::{format_money, format_percent, format_updated};
use crate::models::{PortfolioSnapshot, PriceOrigin};

pub struct DashboardState<'a> {
    pub snapshot: &'a PortfolioSnapshot,
    pub auto_refresh: bool,
    pub demo_mode: bool,
}

fn gain_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn render(frame: &mut Frame, state: &DashboardState, table_state: &mut TableState) {
    let snapshot = state.snapshot;
    let status = snapshot.status();
    let banner_height = if status.last_error().is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let mode = if state.demo_mode { "demo key" } else { "api key" };
    let refresh = if *status.loading() {
        String::from("updating...")
    } else {
        format!("updated {}", format_updated(status.last_updated().as_ref()))
    };
    let auto = if state.auto_refresh { "auto on" } else { "auto off" };
    let title = Paragraph::new(format!("Portfolio Pulse  |  {}  |  {}  |  {}", mode, auto, refresh))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if let Some(error) = status.last_error() {
        let banner = Paragraph::new(format!(
            "Showing cached prices, last update had errors: {}  (Esc to dismiss)",
            error
        ))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);
    }

    render_summary(frame, snapshot, chunks[2]);
    render_assets(frame, snapshot, table_state, chunks[3]);

    let help = Paragraph::new("r/F5 refresh  a auto-refresh  Esc dismiss  Up/Down select  q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

fn render_summary(frame: &mut Frame, snapshot: &PortfolioSnapshot, area: Rect) {
    let totals = snapshot.totals();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let gain_style = Style::default().fg(gain_color(*totals.total_gain()));
    let entries = [
        (
            "Total Value",
            format!(
                "{}  {}",
                format_money(*totals.total_value()),
                format_percent(*totals.gain_percent())
            ),
            gain_style,
        ),
        (
            "Total Invested",
            format_money(*totals.total_invested()),
            Style::default(),
        ),
        ("Total Gain", format_money(*totals.total_gain()), gain_style),
        ("Assets", totals.asset_count().to_string(), Style::default()),
    ];

    for (area, (label, value, style)) in tiles.iter().zip(entries) {
        let tile = Paragraph::new(value)
            .style(style)
            .block(Block::default().title(label).borders(Borders::ALL));
        frame.render_widget(tile, *area);
    }
}

fn render_assets(
    frame: &mut Frame,
    snapshot: &PortfolioSnapshot,
    table_state: &mut TableState,
    area: Rect,
) {
    let views = snapshot.views();

    if views.is_empty() {
        let empty_message = Paragraph::new("No holdings to display.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Symbol", "Name", "Status", "Platform", "Price", "24h", "Shares", "Value", "Invested",
        "G/L", "G/L %",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = views.iter().map(|view| {
        let price = match view.price_origin() {
            PriceOrigin::Live => format!("{:.2}", view.price()),
            PriceOrigin::Baseline => format!("{:.2}*", view.price()),
        };
        let gain = *view.gain();

        let cells = [
            Cell::from(view.symbol().clone()),
            Cell::from(view.name().clone()),
            Cell::from(view.status().to_string()),
            Cell::from(view.platform().clone()),
            Cell::from(price),
            Cell::from(format_percent(Some(*view.change_24h())))
                .style(Style::default().fg(gain_color(*view.change_24h()))),
            Cell::from(format!("{}", view.shares().normalize())),
            Cell::from(format_money(*view.current_value())),
            Cell::from(format_money(*view.invested_amount())),
            Cell::from(format_money(gain)).style(Style::default().fg(gain_color(gain))),
            Cell::from(format_percent(*view.gain_percent()))
                .style(Style::default().fg(gain_color(gain))),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(24),
        Constraint::Length(9),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Your Assets (* baseline price)")
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}
