/// Sudoku-specific renderer and key mapping
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::{GameStatus, GameView};
use crate::games::sudoku::game::{SudokuGame, SudokuInput, SudokuState, CELLS, SIZE};

const SELECTED_BG: Color = Color::Rgb(99, 102, 241);

pub struct SudokuView {
    cursor: usize,
}

impl SudokuView {
    fn moved(&self, d_row: isize, d_col: isize) -> usize {
        let row = (self.cursor / SIZE) as isize + d_row;
        let col = (self.cursor % SIZE) as isize + d_col;
        let row = row.rem_euclid(SIZE as isize) as usize;
        let col = col.rem_euclid(SIZE as isize) as usize;
        row * SIZE + col
    }

    fn cell_span(&self, state: &SudokuState, index: usize) -> Span<'static> {
        let value = state.current_board[index];
        let text = if value == 0 { " · ".to_string() } else { format!(" {} ", value) };

        let mut style = if state.is_given(index) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if state.is_error(index) {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Cyan)
        };

        if state.selected_cell == Some(index) {
            style = style.bg(SELECTED_BG);
        }
        if self.cursor == index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(text, style)
    }

    fn board_lines(&self, state: &SudokuState) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(SIZE + 2);
        for row in 0..SIZE {
            if row == 3 || row == 6 {
                lines.push(Line::from("─────────┼─────────┼─────────"));
            }
            let mut spans = Vec::with_capacity(SIZE + 2);
            for col in 0..SIZE {
                if col == 3 || col == 6 {
                    spans.push(Span::raw("│"));
                }
                spans.push(self.cell_span(state, row * SIZE + col));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl GameView<SudokuGame> for SudokuView {
    fn new() -> Self {
        Self { cursor: 0 }
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &SudokuState) -> Option<SudokuInput> {
        let target = match key.code {
            KeyCode::Up => self.moved(-1, 0),
            KeyCode::Down => self.moved(1, 0),
            KeyCode::Left => self.moved(0, -1),
            KeyCode::Right => self.moved(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(SudokuInput::SelectCell(self.cursor)),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                return c.to_digit(10).map(|d| SudokuInput::EnterDigit(d as u8));
            }
            KeyCode::Backspace | KeyCode::Delete => return Some(SudokuInput::EnterDigit(0)),
            _ => return None,
        };

        // Moving the cursor carries the selection along with it
        self.cursor = target.min(CELLS - 1);
        Some(SudokuInput::SelectCell(self.cursor))
    }

    fn render(&self, frame: &mut Frame, state: &SudokuState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(13), Constraint::Min(0)])
            .split(frame.area());

        let banner = match state.status {
            GameStatus::Won => "🎉 Solved! Press [N] for a new puzzle",
            _ => "Place 1-9 without repeats in any row, column or box",
        };
        frame.render_widget(
            Paragraph::new(banner)
                .alignment(Alignment::Center)
                .block(Block::default().title(" SUDOKU ").borders(Borders::ALL)),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(self.board_lines(state))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new("[Arrows] Move  [1-9] Enter  [0/⌫] Clear  [N] New  [Esc] Menu")
                .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
