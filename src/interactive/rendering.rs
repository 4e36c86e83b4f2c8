//! TUI rendering with ratatui
//!
//! Board, hints and messages for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Colour, Feedback, UNSET_SYMBOL};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the secret code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Terminal colour for a peg
const fn peg_color(colour: Colour) -> Color {
    match colour {
        Colour::Red => Color::Red,
        Colour::Green => Color::Green,
        Colour::Blue => Color::Blue,
        Colour::Yellow => Color::Yellow,
        Colour::Orange => Color::Rgb(255, 165, 0),
        Colour::Purple => Color::Magenta,
        Colour::Indigo => Color::Rgb(75, 0, 130),
        Colour::Violet => Color::LightMagenta,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.pegs()
        .iter()
        .map(|&c| {
            Span::styled(
                format!("{} ", c.letter()),
                Style::default()
                    .fg(peg_color(c))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn key_peg_spans(feedback: Feedback, num_pegs: usize) -> Vec<Span<'static>> {
    feedback
        .to_pegs(num_pegs)
        .chars()
        .map(|c| {
            let style = if c == UNSET_SYMBOL {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            Span::styled(c.to_string(), style)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let num_pegs = app.board.num_pegs();
    let unset = format!("{UNSET_SYMBOL} ").repeat(num_pegs);
    let mut lines = Vec::with_capacity(app.board.num_guesses() + 2);

    for row in 0..app.board.num_guesses() {
        let mut spans = vec![Span::styled(
            format!("{:>2} ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];
        match app.board.turns().get(row) {
            Some(turn) => {
                spans.extend(code_spans(&turn.guess));
                spans.push(Span::raw("│ "));
                spans.extend(key_peg_spans(turn.feedback, num_pegs));
            }
            None => {
                let style = Style::default().fg(Color::DarkGray);
                spans.push(Span::styled(unset.clone(), style));
                spans.push(Span::raw("│ "));
                spans.push(Span::styled(UNSET_SYMBOL.to_string().repeat(num_pegs), style));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("─".repeat(num_pegs * 2 + num_pegs + 5)));
    let mut secret_row = vec![Span::raw("   ")];
    if app.input_mode == InputMode::GameOver {
        secret_row.extend(code_spans(app.holder.reveal()));
    } else {
        secret_row.push(Span::raw("* ".repeat(num_pegs)));
    }
    lines.push(Line::from(secret_row));

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses used gauge
            Constraint::Length(5), // Hint
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_guesses_used(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses_used(f: &mut Frame, app: &App, area: Rect) {
    let used = app.board.turns().len();
    let total = app.board.num_guesses();
    let ratio = if total == 0 {
        0.0
    } else {
        used as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{used}/{total}"));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![match app.candidates_count() {
        Some(count) => Line::from(format!("{count} codes still possible")),
        None => Line::from("Hints unavailable for this board size"),
    }];
    if let Some(hint) = &app.hint {
        let mut spans = vec![Span::raw("Try: ")];
        spans.extend(code_spans(hint));
        content.push(Line::from(spans));
    } else if app.advisor.is_some() {
        content.push(Line::from(Span::styled(
            "Press 'h' for a hint",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Hint ({}) ", app.strategy.name()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let legend = app
        .settings
        .alphabet()
        .colours()
        .iter()
        .map(|c| c.letter().to_string())
        .collect::<String>();

    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(" Enter your guess ({} pegs from {legend}) ", app.settings.num_pegs()),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!(
        "{} pegs, {} colours",
        app.settings.num_pegs(),
        app.settings.num_colours()
    );
    f.render_widget(Paragraph::new(mode_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let average = if app.stats.games_won > 0 {
        format!(
            "Avg guesses: {:.1}",
            app.stats.winning_turns as f64 / app.stats.games_won as f64
        )
    } else {
        "Avg guesses: -".to_string()
    };
    f.render_widget(Paragraph::new(average).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Enter: Submit | h: Hint | n: New | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Settings;
    use crate::solver::StrategyType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_hides_secret() {
        let app = App::new(
            Settings::default(),
            StrategyType::default(),
            StdRng::seed_from_u64(5),
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("Board"));
        assert!(text.contains("0/12"));
        assert!(text.contains("* * * *"));
    }
}
