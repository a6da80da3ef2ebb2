/// Hangman-specific renderer - letter picker over the on-screen keyboard
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::{GameStatus, GameView};
use crate::games::hangman::game::{HangmanGame, HangmanInput, HangmanState, ALPHABET};

const KEYS_PER_ROW: usize = 11;

pub struct HangmanView {
    letters: Vec<char>,
    cursor: usize,
}

impl GameView<HangmanGame> for HangmanView {
    fn new() -> Self {
        Self {
            letters: ALPHABET.chars().collect(),
            cursor: 0,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &HangmanState) -> Option<HangmanInput> {
        let len = self.letters.len();
        match key.code {
            KeyCode::Left => self.cursor = (self.cursor + len - 1) % len,
            KeyCode::Right => self.cursor = (self.cursor + 1) % len,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(KEYS_PER_ROW),
            KeyCode::Down => self.cursor = (self.cursor + KEYS_PER_ROW).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(HangmanInput::Guess(self.letters[self.cursor])),
            // Typing on a Persian layout guesses directly
            KeyCode::Char(c) if self.letters.contains(&c) => {
                if let Some(pos) = self.letters.iter().position(|&l| l == c) {
                    self.cursor = pos;
                }
                return Some(HangmanInput::Guess(c));
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, state: &HangmanState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let banner = match state.status {
            GameStatus::Won => "🎉 Well done! You found the word.".to_string(),
            GameStatus::Lost => format!("❌ Out of tries! The word was '{}'.", state.word),
            GameStatus::Playing => "Find the hidden physics word".to_string(),
        };
        frame.render_widget(
            Paragraph::new(banner)
                .alignment(Alignment::Center)
                .block(Block::default().title(" WORD GUESS ").borders(Borders::ALL)),
            chunks[0],
        );

        let spaced: String = state
            .masked_word()
            .chars()
            .map(|c| format!(" {} ", c))
            .collect();
        let tries = format!(
            "{}{}",
            "▮".repeat(state.remaining_tries() as usize),
            "▯".repeat(state.wrong_count as usize)
        );
        let board = vec![
            Line::from(Span::styled(tries, Style::default().fg(Color::Green))),
            Line::from(""),
            Line::from(Span::styled(spaced, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(format!("💡 {}", state.hint), Style::default().fg(Color::Yellow))),
        ];
        frame.render_widget(
            Paragraph::new(board)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let keyboard: Vec<Line> = self
            .letters
            .chunks(KEYS_PER_ROW)
            .enumerate()
            .map(|(row, keys)| {
                let spans: Vec<Span> = keys
                    .iter()
                    .enumerate()
                    .map(|(col, &c)| {
                        let index = row * KEYS_PER_ROW + col;
                        let mut style = if !state.guessed.contains(&c) {
                            Style::default()
                        } else if state.word.contains(c) {
                            Style::default().fg(Color::Green)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        };
                        if index == self.cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Span::styled(format!(" {} ", c), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(keyboard)
                .alignment(Alignment::Center)
                .block(Block::default().title(" KEYBOARD ").borders(Borders::ALL)),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new("[Arrows] Pick  [Enter] Guess  [N] New word  [Esc] Menu").alignment(Alignment::Center),
            chunks[3],
        );
    }
}
