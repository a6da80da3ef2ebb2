/// Liquid-sort renderer: tubes drawn bottom-up, one row per unit
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::{GameStatus, GameView};
use crate::games::liquid_sort::game::{
    Liquid, LiquidSortGame, LiquidSortInput, LiquidSortState, COLORS_IN_PLAY, TUBE_CAPACITY,
};

fn liquid_color(liquid: Liquid) -> Color {
    match liquid {
        Liquid::Water => Color::Blue,
        Liquid::Mercury => Color::Gray,
        Liquid::Oil => Color::Yellow,
        Liquid::Plasma => Color::Red,
        Liquid::Alcohol => Color::Magenta,
    }
}

pub struct LiquidSortView {
    cursor: usize,
}

impl GameView<LiquidSortGame> for LiquidSortView {
    fn new() -> Self {
        Self { cursor: 0 }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &LiquidSortState) -> Option<LiquidSortInput> {
        let count = state.tubes.len().max(1);
        match key.code {
            KeyCode::Left => self.cursor = (self.cursor + count - 1) % count,
            KeyCode::Right => self.cursor = (self.cursor + 1) % count,
            KeyCode::Enter | KeyCode::Char(' ') => return Some(LiquidSortInput::SelectTube(self.cursor)),
            KeyCode::Char(c) => {
                // Number keys address tubes directly, 1-based
                let index = c.to_digit(10)? as usize;
                if index >= 1 && index <= count {
                    self.cursor = index - 1;
                    return Some(LiquidSortInput::SelectTube(self.cursor));
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, state: &LiquidSortState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(TUBE_CAPACITY as u16 + 5),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let banner = match state.status {
            GameStatus::Won => "🎉 Every liquid is purified!",
            _ => "Gather each liquid into a single tube",
        };
        frame.render_widget(
            Paragraph::new(banner)
                .alignment(Alignment::Center)
                .block(Block::default().title(" LIQUID LAB ").borders(Borders::ALL)),
            chunks[0],
        );

        let mut lines: Vec<Line> = Vec::with_capacity(TUBE_CAPACITY + 3);
        let lifted: Vec<Span> = (0..state.tubes.len())
            .map(|i| Span::raw(if state.selected_tube == Some(i) { "  ▲▲  " } else { "      " }))
            .collect();
        lines.push(Line::from(lifted));

        for level in (0..TUBE_CAPACITY).rev() {
            let spans: Vec<Span> = state
                .tubes
                .iter()
                .map(|tube| match tube.get(level) {
                    Some(&liquid) => Span::styled(" |██| ", Style::default().fg(liquid_color(liquid))),
                    None => Span::raw(" |  | "),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let bases: Vec<Span> = (0..state.tubes.len())
            .map(|i| {
                let style = if i == self.cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Span::styled(format!("  {}   ", i + 1), style)
            })
            .collect();
        lines.push(Line::from(" ╰──╯ ".repeat(state.tubes.len())));
        lines.push(Line::from(bases));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let legend: Vec<Span> = Liquid::ALL[..COLORS_IN_PLAY]
            .iter()
            .map(|&l| Span::styled(format!(" ● {} ", l.name()), Style::default().fg(liquid_color(l))))
            .collect();
        frame.render_widget(Paragraph::new(Line::from(legend)).alignment(Alignment::Center), chunks[2]);

        frame.render_widget(
            Paragraph::new("[←/→] Move  [Enter/1-6] Pick or pour  [N] New  [Esc] Menu")
                .alignment(Alignment::Center),
            chunks[3],
        );
    }
}
