use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::games::GameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResult {
    Play(GameKind),
    Quit,
}

/// Game picker shown between sessions
#[derive(Debug, Default)]
pub struct MenuScreen {
    pub selected_game_index: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MenuResult> {
        let last = GameKind::ALL.len() - 1;
        match key.code {
            KeyCode::Up => self.selected_game_index = self.selected_game_index.saturating_sub(1),
            KeyCode::Down => self.selected_game_index = (self.selected_game_index + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return Some(MenuResult::Play(GameKind::ALL[self.selected_game_index]));
            }
            KeyCode::Char('q') | KeyCode::Esc => return Some(MenuResult::Quit),
            _ => {}
        }
        None
    }

    pub async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal, events: &mut EventStream) -> Result<MenuResult> {
        loop {
            terminal.draw(|f| self.render(f)).context("drawing menu")?;

            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(result) = self.handle_key(key) {
                        return Ok(result);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("reading terminal events"),
                None => return Ok(MenuResult::Quit),
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" LAB ARCADE ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = GameKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let info = kind.info();
                let style = if i == self.selected_game_index {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {} : {}", info.name, info.description)).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" GAMES ").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play  [Q] Quit").alignment(Alignment::Center),
            chunks[2],
        );
    }
}
