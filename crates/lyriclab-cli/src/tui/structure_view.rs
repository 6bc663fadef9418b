use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use lyriclab_core::structure::SectionType;

use super::{App, Focus};

/// Render the structure editor.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Palette and sequence
            Constraint::Length(3), // Structure string
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(chunks[1]);

    render_title(frame, app, chunks[0]);
    render_palette(frame, app, panes[0]);
    render_sequence(frame, app, panes[1]);
    render_serialized(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let marker = if app.dirty { "  [modified]" } else { "" };
    let title = Paragraph::new(format!(
        "Song Structure    {}    {} sections{}",
        app.path.display(),
        app.form.structure().len(),
        marker
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_palette(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Palette;
    let rows: Vec<Row> = SectionType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let style = if focused && i == app.palette_index {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(kind.short()).style(Style::default().fg(Color::Yellow)),
                Cell::from(kind.label()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(4), Constraint::Min(10)])
        .block(pane_block("Add".to_string(), focused));
    frame.render_widget(table, area);
}

fn render_sequence(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sequence;
    let sections = app.form.structure().sections();

    // area.height - 2 for borders
    let viewport_height = area.height.saturating_sub(2) as usize;
    let visible_start = app
        .selected
        .saturating_sub(viewport_height.saturating_sub(1));

    let rows: Vec<Row> = sections
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, section)| {
            let style = if focused && i == app.selected {
                if app.moving {
                    Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                }
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(section.short().to_string()),
                Cell::from(section.label().to_string()),
            ])
            .style(style)
        })
        .collect();

    let title = if app.moving {
        "Sequence (moving)".to_string()
    } else if sections.is_empty() {
        "Sequence (empty)".to_string()
    } else {
        "Sequence".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(10),
        ],
    )
    .block(pane_block(title, focused));
    frame.render_widget(table, area);
}

fn render_serialized(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.status.is_empty() {
        app.form.spec().structure.clone()
    } else {
        format!("{}    {}", app.form.spec().structure, app.status)
    };
    let line = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("structure"));
    frame.render_widget(line, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.focus {
        Focus::Palette => "  \u{2191}/k Up  \u{2193}/j Down  Enter/a Add  Tab Sequence  t Template  s Save  q Quit",
        Focus::Sequence if app.moving => {
            "  \u{2191}/k Move up  \u{2193}/j Move down  Space/Esc Drop  s Save"
        }
        Focus::Sequence => "  \u{2191}/k Up  \u{2193}/j Down  Space Move  d Delete  Tab Palette  t Template  s Save  q Quit",
    };
    let help = Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
