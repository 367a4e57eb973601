use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};
use tasklist_core::{FilterMode, Notice, TaskRepository};
use unicode_width::UnicodeWidthStr;

use crate::listing::EMPTY_STATE;
use crate::tui::app::{App, InputMode};

pub fn draw<R: TaskRepository>(f: &mut Frame, app: &mut App<R>) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Filters
            Constraint::Min(1),    // Tasks
            Constraint::Length(3), // Input
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help
        ])
        .split(size);

    let header = Paragraph::new("TASKLIST")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, chunks[0]);

    draw_filters(f, app.controller.filter(), chunks[1]);
    draw_task_list(f, app, chunks[2]);
    draw_input(f, app, chunks[3]);
    draw_notice(f, app.controller.notice(), chunks[4]);

    let help = match app.input_mode {
        InputMode::Normal => {
            "a: Add | e: Edit | space: Toggle | d: Delete | f/1-3: Filter | j/k: Navigate | q: Quit"
        }
        _ => "Enter: Save | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[5]);
}

fn draw_filters(f: &mut Frame, active: FilterMode, area: Rect) {
    let titles = FilterMode::ALL_MODES.iter().map(|mode| mode.label());
    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(Block::default().title(" Filter ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_task_list<R: TaskRepository>(f: &mut Frame, app: &mut App<R>, area: Rect) {
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let visible = app.controller.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            let (check, text_style) = if task.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(check, Style::default().fg(Color::Green)),
                Span::styled(task.text.as_str(), text_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn draw_input<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, style) = match app.input_mode {
        InputMode::Normal => (" New task (a) ", Style::default().fg(Color::DarkGray)),
        InputMode::Adding => (" New task ", Style::default().fg(Color::Yellow)),
        InputMode::Editing(_) => (" Edit task ", Style::default().fg(Color::Yellow)),
    };

    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);

    if app.input_mode != InputMode::Normal {
        let before: String = app.input.chars().take(app.cursor_position).collect();
        let x = area.x + 1 + before.width() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_notice(f: &mut Frame, notice: Option<&Notice>, area: Rect) {
    let line = match notice {
        Some(Notice::Error(msg)) => Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
        Some(Notice::Warning(msg)) => Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
        None => Span::raw(""),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
