/// Memory-specific renderer and key mapping
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::{GameStatus, GameView};
use crate::games::memory::game::{MemoryGame, MemoryInput, MemoryState, DECK_SIZE};

const COLUMNS: usize = 4;

pub struct MemoryView {
    cursor: usize,
}

impl GameView<MemoryGame> for MemoryView {
    fn new() -> Self {
        Self { cursor: 0 }
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &MemoryState) -> Option<MemoryInput> {
        match key.code {
            KeyCode::Left => self.cursor = (self.cursor + DECK_SIZE - 1) % DECK_SIZE,
            KeyCode::Right => self.cursor = (self.cursor + 1) % DECK_SIZE,
            KeyCode::Up => self.cursor = (self.cursor + DECK_SIZE - COLUMNS) % DECK_SIZE,
            KeyCode::Down => self.cursor = (self.cursor + COLUMNS) % DECK_SIZE,
            KeyCode::Enter | KeyCode::Char(' ') => return Some(MemoryInput::Flip(self.cursor)),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, state: &MemoryState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(10), Constraint::Min(0)])
            .split(frame.area());

        let banner = match state.status {
            GameStatus::Won => format!("🎉 All pairs found in {} moves!", state.moves),
            _ => format!("Moves: {}", state.moves),
        };
        frame.render_widget(
            Paragraph::new(banner)
                .alignment(Alignment::Center)
                .block(Block::default().title(" MEMORY MATCH ").borders(Borders::ALL)),
            chunks[0],
        );

        let mut lines: Vec<Line> = Vec::new();
        for (r, cards) in state.cards.chunks(COLUMNS).enumerate() {
            let spans: Vec<Span> = cards
                .iter()
                .enumerate()
                .map(|(c, card)| {
                    let index = r * COLUMNS + c;
                    let face = if card.is_flipped || card.is_matched { card.icon.as_str() } else { "❓" };
                    let mut style = if card.is_matched {
                        Style::default().fg(Color::Green)
                    } else if card.is_flipped {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Blue)
                    };
                    if index == self.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("  {}  ", face), style)
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new("[Arrows] Move  [Enter] Flip  [N] New  [Esc] Menu").alignment(Alignment::Center),
            chunks[2],
        );
    }
}
