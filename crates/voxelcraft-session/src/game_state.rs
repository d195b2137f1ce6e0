//! Top-level menu / playing state machine.

use tracing::{debug, info};
use voxelcraft_config::Config;

use crate::session::Session;

/// Whether a game is in progress.
#[derive(Debug, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing(Box<Session>),
}

impl GameState {
    /// Starts a new session from the menu. While already playing, the current session is kept.
    ///
    /// Returns `true` if a new session was started.
    pub fn start_game(&mut self, config: &Config) -> bool {
        if self.is_playing() {
            debug!("start_game while playing, keeping current session");
            return false;
        }
        info!("starting game");
        *self = GameState::Playing(Box::new(Session::start(config)));
        true
    }

    /// Ends the session, if any, and goes back to the menu.
    ///
    /// Returns `true` if a session was ended.
    pub fn return_to_menu(&mut self) -> bool {
        match std::mem::take(self) {
            GameState::Playing(mut session) => {
                session.end();
                info!("returned to menu");
                true
            }
            GameState::Menu => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            GameState::Playing(session) => Some(session),
            GameState::Menu => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            GameState::Playing(session) => Some(session),
            GameState::Menu => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelcraft_config::WorldConfig;

    fn small_config() -> Config {
        Config {
            world: WorldConfig {
                platform_half_size: 3,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let state = GameState::default();
        assert!(!state.is_playing());
        assert!(state.session().is_none());
    }

    #[test]
    fn test_start_and_return() {
        let mut state = GameState::default();
        let config = small_config();

        assert!(state.start_game(&config));
        assert!(state.is_playing());
        assert!(!state.session().unwrap().world().is_empty());

        assert!(state.return_to_menu());
        assert!(!state.is_playing());
        assert!(!state.return_to_menu());
    }

    #[test]
    fn test_start_while_playing_keeps_session() {
        let mut state = GameState::default();
        let config = small_config();

        state.start_game(&config);
        state
            .session_mut()
            .unwrap()
            .select_block(voxelcraft_voxel::BlockType::Wood);

        assert!(!state.start_game(&config));
        let session = state.session().unwrap();
        assert_eq!(session.selected_block(), voxelcraft_voxel::BlockType::Wood);
    }
}
