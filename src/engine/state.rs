//! Engine states, actions and the table of which action is legal where

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`super::GameEngine`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    #[default]
    Init,
    Playing,
    GameOver,
}

/// The four engine actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Stop,
    Play,
    ContinuePlaying,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Start,
        Action::Stop,
        Action::Play,
        Action::ContinuePlaying,
    ];
}

/// Allowed actions per state:
///
/// | State    | start     | stop   | play                  | continue_playing |
/// |----------|-----------|--------|-----------------------|------------------|
/// | Init     | → Playing |        |                       |                  |
/// | Playing  |           | → Init | → Playing or GameOver |                  |
/// | GameOver |           | → Init |                       | → Playing        |
const TRANSITIONS: [(EngineState, Action); 5] = [
    (EngineState::Init, Action::Start),
    (EngineState::Playing, Action::Stop),
    (EngineState::Playing, Action::Play),
    (EngineState::GameOver, Action::Stop),
    (EngineState::GameOver, Action::ContinuePlaying),
];

impl EngineState {
    /// Whether `action` may be invoked in this state
    pub fn allows(self, action: Action) -> bool {
        TRANSITIONS.contains(&(self, action))
    }

    /// Fail with [`crate::Error::IllegalState`] unless `action` is allowed
    pub fn check(self, action: Action) -> crate::Result<()> {
        if self.allows(action) {
            Ok(())
        } else {
            Err(crate::Error::IllegalState {
                action,
                state: self,
            })
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Init => write!(f, "init"),
            EngineState::Playing => write!(f, "playing"),
            EngineState::GameOver => write!(f, "game over"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::Stop => write!(f, "stop"),
            Action::Play => write!(f, "play"),
            Action::ContinuePlaying => write!(f, "continue playing"),
        }
    }
}
