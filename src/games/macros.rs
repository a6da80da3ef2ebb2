/// Macro to register games and generate the `GameKind` dispatcher
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     Sudoku => {
///         types: (SudokuGame, SudokuView),
///         id: "sudoku",
///         settings: |config| config.sudoku.clone()
///     },
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    (
        $(
            $variant:ident => {
                types: ($game:ty, $view:ty),
                id: $id:expr,
                settings: $settings:expr
            }
        ),* $(,)?
    ) => {
        /// One variant per playable game
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GameKind {
            $( $variant ),*
        }

        impl GameKind {
            pub const ALL: &'static [GameKind] = &[ $( GameKind::$variant ),* ];

            pub fn info(self) -> GameInfo {
                use $crate::core::game::PuzzleGame;
                match self {
                    $(
                        GameKind::$variant => GameInfo {
                            id: $id,
                            name: <$game as PuzzleGame>::NAME,
                            description: <$game as PuzzleGame>::DESCRIPTION,
                        },
                    )*
                }
            }

            pub fn from_id(id: &str) -> Option<GameKind> {
                GameKind::ALL.iter().copied().find(|kind| kind.info().id == id)
            }
        }

        /// Run a session of `kind` until the player leaves it
        pub async fn launch(
            kind: GameKind,
            terminal: &mut ratatui::DefaultTerminal,
            events: &mut crossterm::event::EventStream,
            config: &$crate::config::ArcadeConfig,
        ) -> anyhow::Result<$crate::core::engine::SessionExit> {
            use $crate::core::engine::Engine;
            use $crate::core::game::PuzzleGame;

            match kind {
                $(
                    GameKind::$variant => {
                        let pick: fn(&$crate::config::ArcadeConfig) -> <$game as PuzzleGame>::Settings = $settings;
                        let engine = Engine::<$game, $view>::new(pick(config), config.session_rng(), config.tick_rate());
                        engine.run(terminal, events).await
                    }
                )*
            }
        }
    };
}
