//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and status bar for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, WORD_LENGTH};
use crate::game::keyboard::QWERTY_ROWS;
use crate::output::formatters::attempt_to_emoji;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
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

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colours for a letter state
#[must_use]
pub const fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterState::Unknown => Style::new().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.game.config().hard_mode.is_enabled() {
        "WORDYE (hard mode)"
    } else {
        "WORDYE"
    };
    let header = Paragraph::new(title)
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

/// One line per attempt, the row being typed, then empty rows
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let game = &app.game;
    let mut lines = Vec::with_capacity(game.config().max_attempts);

    for attempt in game.attempts() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for letter in attempt.letters() {
            spans.push(Span::styled(
                format!(" {} ", letter.as_char()),
                tile_style(letter.state()),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !game.is_over() && app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let text = typed.get(i).map_or(" _ ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let shown = lines.len() / 2;
    for _ in shown..game.config().max_attempts {
        lines.push(Line::from(" _   _   _   _   _ ").style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Board {}/{} ",
                    app.game.attempts().len(),
                    app.game.config().max_attempts
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Keyboard and summary
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let mut lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {c} "), tile_style(keyboard.state(c))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if app.game.is_over() {
        lines.push(Line::from(""));
        lines.extend(
            app.game
                .attempts()
                .iter()
                .map(|a| Line::from(attempt_to_emoji(a))),
        );
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.is_won() => (
            " 🎉 SOLVED! | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            format!("The answer was {}", app.game.solution()),
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter Guess | Enter to submit, Esc to give up ",
            app.input_buffer.clone(),
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

    let mode_text = format!("Hard mode: {:?}", app.game.config().hard_mode);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let remaining_text = format!("Guesses left: {}", app.game.remaining_attempts());
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Esc/Ctrl-C: Give Up",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HardMode, Word};
    use crate::game::{Game, GameConfig};
    use crate::wordlists::Catalog;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn catalog() -> Catalog {
        Catalog::new(
            words_from_slice(&["abide", "crane"]),
            words_from_slice(&["adieu"]),
        )
        .unwrap()
    }

    fn app(catalog: &Catalog) -> App<'_> {
        let config = GameConfig::new(HardMode::Off, 6);
        let mut app = App::new(catalog, config, StdRng::seed_from_u64(0));
        app.game = Game::with_solution(catalog, Word::new("abide").unwrap(), config);
        app
    }

    #[test]
    fn board_has_a_row_per_attempt() {
        let catalog = catalog();
        let mut app = app(&catalog);
        assert_eq!(board_lines(&app).len(), 12);

        app.game.submit("crane").unwrap();
        app.input_buffer = "AB".to_string();
        let lines = board_lines(&app);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].spans[0].content, " C ");
        assert_eq!(lines[0].spans[0].style, tile_style(LetterState::Absent));
        assert_eq!(lines[2].spans[0].content, " A ");
        assert_eq!(lines[2].spans[4].content, " _ ");
    }

    #[test]
    fn tile_styles_differ_by_state() {
        assert_ne!(
            tile_style(LetterState::Correct),
            tile_style(LetterState::Present)
        );
        assert_ne!(
            tile_style(LetterState::Present),
            tile_style(LetterState::Absent)
        );
    }

    #[test]
    fn ui_renders_without_panicking() {
        let catalog = catalog();
        let mut app = app(&catalog);
        app.game.submit("crane").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.game.submit("abide").unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
