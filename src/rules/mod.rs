//! Game rules: the legality oracle, positions and the turn engine.
//!
//! - `legality`: which cells may be taken next
//! - `position`: board + previous move + scores + seat to move
//! - `engine`: drives two players through a game
//!
//! Every consumer (engine, strategies, searches, external drivers) goes
//! through `legal_moves`, so there is exactly one rule implementation.

pub mod engine;
pub mod legality;
pub mod position;

pub use engine::{Game, GamePhase, GameSummary, MoveRecord};
pub use legality::{has_legal_move, is_legal, legal_moves, MoveList};
pub use position::{GameResult, Position};
