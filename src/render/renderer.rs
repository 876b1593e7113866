use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameSession, Heading, Position, SnakeColor};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], session, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render play area or game over screen
        if session.game_over {
            let game_over = self.render_game_over(game_area, session);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, session);
            frame.render_widget(grid, game_area);
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2], session.num_players);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..session.grid.height() {
            let mut spans = Vec::new();

            for x in 0..session.grid.width() {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == session.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if let Some(index) = session.grid.snake_at(pos) {
                    let snake = &session.snakes[index];
                    let color = snake_color(snake.color);
                    if snake.head() == Some(pos) {
                        // The head glyph doubles as the eyes: it points
                        // where the snake is crawling.
                        Span::styled(
                            head_glyph(snake.heading),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled("■ ", Style::default().fg(color))
                    }
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Arena "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        session: &GameSession,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.speed.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Snakes: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", session.live_snake_count(), session.snakes.len()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Speed: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.speed.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Closing shortly...",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, num_players: usize) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move"),
        ];
        if num_players > 1 {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("WASD", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" moves player two"));
        }
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn snake_color(color: SnakeColor) -> Color {
    match color {
        SnakeColor::White => Color::White,
        SnakeColor::Grey => Color::Rgb(77, 77, 77),
        SnakeColor::Gold => Color::Rgb(255, 215, 0),
        SnakeColor::Goldenrod => Color::Rgb(218, 165, 32),
        SnakeColor::Khaki => Color::Rgb(240, 230, 140),
    }
}

fn head_glyph(heading: Heading) -> &'static str {
    match heading {
        Heading::East => "▶ ",
        Heading::West => "◀ ",
        Heading::North => "▲ ",
        Heading::South => "▼ ",
    }
}
