//! Interactive TUI mode.

mod app;
mod events;
mod terminal;

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::shared::services::Services;

use app::{App, AppEvent};
use events::{handle_key, EventHandler};
use terminal::Terminal;

/// Run the TUI application.
pub async fn run(services: Services) -> Result<()> {
    let mut terminal = Terminal::enter()?;

    let (tx, mut rx) = unbounded_channel();
    let mut app = App::new(services, tx);
    app.refresh_regions();

    let result = run_app(&mut terminal, &mut app, &mut rx).await;
    terminal.exit()?;
    result
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if let Some(key) = events.next_key() {
            handle_key(app, key);
        }

        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI.
fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(1),    // Content
        Constraint::Length(3), // Footer
    ])
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " tricovid ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("- Latest COVID-19 figures for UK local authorities"),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    if app.show_help {
        render_help(frame, layout[1]);
    } else {
        render_main(frame, layout[1], app);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
        Span::raw("select  "),
        Span::styled(" F5 ", Style::default().fg(Color::Yellow)),
        Span::raw("refresh  "),
        Span::styled(" F1 ", Style::default().fg(Color::Yellow)),
        Span::raw("help  "),
        Span::styled(" Ctrl-C ", Style::default().fg(Color::Yellow)),
        Span::raw("quit"),
    ]))
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, layout[2]);
}

/// Render the search box, suggestions, data cards and status line.
fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let suggestions = app.suggestions();
    let dropdown_height = if suggestions.is_empty() {
        0
    } else {
        suggestions.len() as u16 + 2
    };

    let layout = Layout::vertical([
        Constraint::Length(3),               // Search
        Constraint::Length(dropdown_height), // Suggestions
        Constraint::Length(6),               // Cards
        Constraint::Length(1),               // Status
        Constraint::Min(0),
    ])
    .split(area);

    let search = Paragraph::new(Line::from(vec![
        Span::raw(app.query.as_str()),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Search Region ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(search, layout[0]);

    if !suggestions.is_empty() {
        let lines: Vec<Line> = suggestions
            .iter()
            .enumerate()
            .map(|(index, name)| {
                if index == app.highlighted {
                    Line::from(Span::styled(
                        format!("> {}", name),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan),
                    ))
                } else {
                    Line::from(format!("  {}", name))
                }
            })
            .collect();
        let dropdown = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(dropdown, layout[1]);
    }

    let cards = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(layout[2]);
    render_card(frame, cards[0], "Cases", &app.record.case_value, &app.record.case_date);
    render_card(frame, cards[1], "Deaths", &app.record.death_value, &app.record.death_date);

    let mut status = vec![
        Span::styled(" Status: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.phase.label()),
        Span::styled(
            format!("  {} regions", app.regions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(region) = &app.selected {
        status.push(Span::styled("  Region: ", Style::default().fg(Color::DarkGray)));
        status.push(Span::styled(region.as_str(), Style::default().fg(Color::Green)));
    }
    if let Some(updated) = app.last_updated {
        status.push(Span::styled(
            format!("  Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), layout[3]);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: &str, detail: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))).centered(),
    ];

    let card = Paragraph::new(content).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(card, area);
}

/// Render the help overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", k), Style::default().fg(Color::Yellow)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("type", "Search regions by name"),
        key("Up/Down", "Move through suggestions"),
        key("Enter", "Show figures for the highlighted region"),
        key("F5", "Reload the region list (also Ctrl-R)"),
        key("Esc", "Clear the search / quit when empty"),
        key("F1", "Toggle this help"),
        key("Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Cases shows 7-day rolling test positivity; Deaths shows weekly ONS deaths.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(help, area);
}
