//! Legal positions, values and actions, and validated action application.

use crate::core::{Action, Board, Position, Side, Value};
use crate::error::{Error, IllegalReason, Result};

use super::terminal::is_winning;

/// Unused values, split by the side that owns them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedValues {
    /// Unused odd values, ascending.
    pub agent: Vec<Value>,
    /// Unused even values, ascending.
    pub environment: Vec<Value>,
}

impl AllowedValues {
    /// Values available to `side`.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &[Value] {
        match side {
            Side::Agent => &self.agent,
            Side::Environment => &self.environment,
        }
    }
}

/// Legal actions for both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionSpace {
    pub agent: Vec<Action>,
    pub environment: Vec<Action>,
}

impl ActionSpace {
    /// Actions available to `side`.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &[Action] {
        match side {
            Side::Agent => &self.agent,
            Side::Environment => &self.environment,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agent.is_empty() && self.environment.is_empty()
    }
}

/// All empty positions, ascending.
#[must_use]
pub fn allowed_positions(board: &Board) -> Vec<Position> {
    Position::all().filter(|&p| board.is_empty_at(p)).collect()
}

/// Values 1-9 not yet on the board, partitioned by parity.
#[must_use]
pub fn allowed_values(board: &Board) -> AllowedValues {
    let (agent, environment): (Vec<Value>, Vec<Value>) = Value::all()
        .filter(|&v| !board.contains(v))
        .partition(|v| v.is_odd());
    AllowedValues { agent, environment }
}

/// Every legal action for both sides, position-major, value-minor.
///
/// A won board has no legal actions for either side, even if cells
/// remain empty.
#[must_use]
pub fn action_space(board: &Board) -> ActionSpace {
    if is_winning(board) {
        return ActionSpace::default();
    }

    let positions = allowed_positions(board);
    let values = allowed_values(board);
    let product = |owned: &[Value]| -> Vec<Action> {
        positions
            .iter()
            .flat_map(|&p| owned.iter().map(move |&v| Action::new(p, v)))
            .collect()
    };

    ActionSpace {
        agent: product(values.agent.as_slice()),
        environment: product(values.environment.as_slice()),
    }
}

/// Legal actions for one side.
#[must_use]
pub fn legal_actions(board: &Board, side: Side) -> Vec<Action> {
    let mut space = action_space(board);
    match side {
        Side::Agent => std::mem::take(&mut space.agent),
        Side::Environment => std::mem::take(&mut space.environment),
    }
}

/// Check an action against the board without modifying it.
///
/// # Errors
///
/// Returns [`Error::IllegalAction`] if the value has the wrong parity for
/// `side`, the position is occupied, or the value is already on the board.
pub fn validate(board: &Board, side: Side, action: Action) -> Result<()> {
    let reason = if !side.owns(action.value) {
        Some(IllegalReason::WrongParity)
    } else if !board.is_empty_at(action.position) {
        Some(IllegalReason::PositionOccupied)
    } else if board.contains(action.value) {
        Some(IllegalReason::ValueUsed)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::IllegalAction { action, side, reason }),
        None => Ok(()),
    }
}

/// Validate and place an action. The board is untouched on error.
///
/// # Errors
///
/// See [`validate`].
pub fn apply(board: &mut Board, side: Side, action: Action) -> Result<()> {
    validate(board, side, action)?;
    board.place(action.position, action.value);
    tracing::trace!(%side, %action, board = %board.key(), "applied action");
    Ok(())
}
