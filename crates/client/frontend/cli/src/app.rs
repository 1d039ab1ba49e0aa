//! Glue code tying the demo content, the input handler, and the terminal
//! UI together.
use anyhow::Result;
use client_frontend_core::{Control, InputHandler};
use game_core::{GameEngine, GameEnv, GameState, MapOracle};

use crate::config::CliConfig;
use crate::content::{self, DemoItems, HostileProvider, LineOfSightFov, Scenario};
use crate::input;
use crate::presentation::{Screen, TerminalGuard, terminal, ui};

pub struct CliApp {
    config: CliConfig,
    map: Box<dyn MapOracle>,
    state: GameState,
}

impl CliApp {
    /// Starts a session on the built-in demo dungeon.
    pub fn new(config: CliConfig) -> Self {
        let Scenario { map, state } = content::demo_scenario(&config.frontend.game);
        Self {
            config,
            map: Box::new(map),
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!(
            entities = self.state.entities.len(),
            "CLI client starting..."
        );

        let items = DemoItems;
        let provider = HostileProvider;
        let fov = LineOfSightFov;
        let env = GameEnv::new(&self.config.frontend.game)
            .with_map(self.map.as_ref())
            .with_items(&items)
            .with_provider(&provider)
            .with_fov(&fov);

        GameEngine::new(&mut self.state).update_fov(env);
        let mut handler = InputHandler::new(&self.config.frontend);

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;

        loop {
            let screen = Screen {
                map: self.map.as_ref(),
                state: &self.state,
                mode: handler.mode(),
                mouse: handler.mouse_location(),
                ui: &self.config.ui,
            };
            ui::render(&mut terminal, &screen)?;

            let raw = crossterm::event::read()?;
            let Some(event) = input::translate(&raw) else {
                continue;
            };

            let control = handler.handle_event(&event, &mut self.state, env)?;
            content::reap_dead(&mut self.state);

            if control == Control::Quit {
                break;
            }
        }

        tracing::info!(turns = self.state.turn.nonce, "CLI client stopped");
        Ok(())
    }
}
