//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Engine, Occupant, OpponentStrategy, Phase, Position};

use super::app::App;

/// Renders title, board, status and help.
pub fn draw<S: OpponentStrategy>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let engine = app.engine();

    let title = Paragraph::new(format!("Tic-Tac-Toe vs {}", engine.strategy().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], engine, app.cursor());

    let status = Paragraph::new(engine.phase().status_label())
        .style(status_style(engine.phase()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows + Enter or 1-9: move | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn status_style(phase: Phase) -> Style {
    match phase {
        Phase::HumanWon => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Phase::OpponentWon | Phase::Error => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        _ => Style::default().fg(Color::Yellow),
    }
}

fn draw_board<S: OpponentStrategy>(
    frame: &mut Frame,
    area: Rect,
    engine: &Engine<S>,
    cursor: Position,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], engine, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<S: OpponentStrategy>(
    frame: &mut Frame,
    area: Rect,
    engine: &Engine<S>,
    cursor: Position,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], engine, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell<S: OpponentStrategy>(
    frame: &mut Frame,
    area: Rect,
    engine: &Engine<S>,
    cursor: Position,
    pos: Position,
) {
    let occupant = engine.grid().at(pos);
    let symbol = match occupant {
        Occupant::Empty => format!("{}", pos.to_index() + 1),
        other => other.symbol().to_string(),
    };

    let base_style = match occupant {
        Occupant::Empty => Style::default().fg(Color::DarkGray),
        Occupant::Human => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Occupant::Opponent => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let on_winning_line = engine
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        let bg = match engine.phase() {
            Phase::HumanWon => Color::Green,
            _ => Color::Magenta,
        };
        base_style.bg(bg).fg(Color::White)
    } else if pos == cursor && !engine.phase().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
