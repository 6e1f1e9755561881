//! Game engine: a state machine that sequences turns and adjudicates moves
//!
//! The engine owns its context (state, turn, grid) and changes it only
//! through the four actions. Every action outcome is pushed to the
//! engine's [`EventListener`] as an [`Event`]; misuse of an action
//! (wrong state, non-player token) is returned as an error instead and
//! leaves the engine untouched.

pub mod event;
pub mod state;

pub use event::{Event, InvalidMove, LastMove, Outcome, StartKind};
pub use state::{Action, EngineState};

use tracing::{debug, instrument};

use crate::{
    Error, Result,
    adapters::EventLog,
    ports::EventListener,
    tictactoe::{Evaluation, Evaluator, GameOver, Grid, Position, Token},
};

/// Mutable state owned by one engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameContext {
    state: EngineState,
    turn: Option<Token>,
    grid: Grid,
}

impl GameContext {
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whose turn it is; `None` outside of a game
    pub fn turn(&self) -> Option<Token> {
        self.turn
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn reset(&mut self) {
        self.set_turn_and_clear_grid(None);
    }

    fn set_turn_and_clear_grid(&mut self, turn: Option<Token>) {
        self.turn = turn;
        self.grid.clear();
    }

    fn switch_turns(&mut self) {
        self.turn = self.turn.map(Token::other);
    }
}

/// Tic-tac-toe game engine
///
/// # Examples
///
/// ```
/// use xo::engine::{EngineState, Event, GameEngine};
/// use xo::tictactoe::Token;
///
/// let mut engine: GameEngine = GameEngine::default();
/// engine.start(Token::X)?;
/// engine.play(1, 1)?;
/// assert_eq!(engine.state(), EngineState::Playing);
/// assert_eq!(engine.turn(), Some(Token::O));
/// assert_eq!(engine.listener().last().map(Event::name), Some("next_turn"));
/// # Ok::<(), xo::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine<L = EventLog> {
    context: GameContext,
    listener: L,
}

impl<L: EventListener> GameEngine<L> {
    pub fn new(listener: L) -> Self {
        Self {
            context: GameContext::default(),
            listener,
        }
    }

    pub fn state(&self) -> EngineState {
        self.context.state
    }

    pub fn turn(&self) -> Option<Token> {
        self.context.turn
    }

    /// A copy of the current grid
    pub fn grid(&self) -> Grid {
        self.context.grid
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Start a new game with `token` to move first.
    ///
    /// Emits `game_started`.
    #[instrument(skip(self))]
    pub fn start(&mut self, token: Token) -> Result<()> {
        self.context.state.check(Action::Start)?;
        let token = token.require_player()?;
        self.begin(token, None);
        Ok(())
    }

    /// Abandon the session and return to `Init`.
    ///
    /// Emits `game_stopped`.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> Result<()> {
        self.context.state.check(Action::Stop)?;
        self.context.reset();
        self.transition(EngineState::Init);
        self.emit(Event::GameStopped);
        Ok(())
    }

    /// Place the current player's token at (`row`, `col`).
    ///
    /// Off-grid and occupied cells are reported as `invalid_move` events and
    /// change nothing. A legal move emits `next_turn`, or `game_over` when it
    /// wins or fills the grid. A winning move leaves the turn with the
    /// winner; a squashing move passes it on.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<()> {
        let state = self.context.state;
        state.check(Action::Play)?;
        let Some(turn) = self.context.turn else {
            return Err(Error::IllegalState {
                action: Action::Play,
                state,
            });
        };

        let pos = Position::new(row, col);
        if !Grid::contains(pos) {
            self.emit(Event::InvalidMove {
                reason: InvalidMove::OutOfBounds,
            });
            return Ok(());
        }
        if !self.context.grid.is_open(pos)? {
            self.emit(Event::InvalidMove {
                reason: InvalidMove::Occupied,
            });
            return Ok(());
        }

        let grid = self.context.grid.with_move(pos, turn)?;
        let last_move = LastMove { turn, row, col };

        match Evaluator::analyze(&grid, turn)? {
            Evaluation::Ok => {
                self.context.grid = grid;
                self.context.switch_turns();
                self.emit(Event::NextTurn { last_move });
            }
            Evaluation::GameOver(GameOver::Winner(details)) => {
                self.context.grid = grid;
                self.transition(EngineState::GameOver);
                self.emit(Event::GameOver {
                    outcome: Outcome::Winner { details },
                    last_move,
                });
            }
            Evaluation::GameOver(GameOver::Squashed) => {
                self.context.grid = grid;
                self.context.switch_turns();
                self.transition(EngineState::GameOver);
                self.emit(Event::GameOver {
                    outcome: Outcome::Squashed,
                    last_move,
                });
            }
            evaluation => {
                return Err(Error::UnexpectedEvaluation {
                    grid: grid.encode(),
                    evaluation: evaluation.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Start another game after one has finished, with `token` to move first.
    ///
    /// Emits `game_started` tagged `continue_playing`.
    #[instrument(skip(self))]
    pub fn continue_playing(&mut self, token: Token) -> Result<()> {
        self.context.state.check(Action::ContinuePlaying)?;
        let token = token.require_player()?;
        self.begin(token, Some(StartKind::ContinuePlaying));
        Ok(())
    }

    fn begin(&mut self, token: Token, kind: Option<StartKind>) {
        self.context.set_turn_and_clear_grid(Some(token));
        self.transition(EngineState::Playing);
        self.emit(Event::GameStarted { kind });
    }

    fn transition(&mut self, next: EngineState) {
        debug!(from = %self.context.state, to = %next, "engine transition");
        self.context.state = next;
    }

    fn emit(&mut self, event: Event) {
        debug!(event = event.name(), grid = %self.context.grid.encode(), "engine event");
        self.listener.on_event(&event);
    }
}

impl Default for GameEngine<EventLog> {
    fn default() -> Self {
        Self::new(EventLog::new())
    }
}
