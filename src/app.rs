/// Top-level screen dispatcher: menu and game sessions share one terminal
use anyhow::Result;
use crossterm::event::EventStream;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::ArcadeConfig;
use crate::core::engine::SessionExit;
use crate::core::menu::{MenuResult, MenuScreen};
use crate::games::{launch, GameKind};

/// What the arcade is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(GameKind),
    Quit,
}

impl Screen {
    pub fn after_menu(result: MenuResult) -> Screen {
        match result {
            MenuResult::Play(kind) => Screen::Playing(kind),
            MenuResult::Quit => Screen::Quit,
        }
    }

    pub fn after_session(exit: SessionExit) -> Screen {
        match exit {
            SessionExit::BackToMenu => Screen::Menu,
            SessionExit::Quit => Screen::Quit,
        }
    }
}

pub struct App {
    config: ArcadeConfig,
    menu: MenuScreen,
}

impl App {
    pub fn new(config: ArcadeConfig) -> Self {
        Self {
            config,
            menu: MenuScreen::new(),
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal, start: Screen) -> Result<()> {
        let mut events = EventStream::new();
        let mut screen = start;

        loop {
            screen = match screen {
                Screen::Menu => Screen::after_menu(self.menu.run(terminal, &mut events).await?),
                Screen::Playing(kind) => {
                    info!(game = kind.info().id, "session started");
                    let exit = launch(kind, terminal, &mut events, &self.config).await?;
                    info!(game = kind.info().id, ?exit, "session ended");
                    Screen::after_session(exit)
                }
                Screen::Quit => return Ok(()),
            };
        }
    }
}
