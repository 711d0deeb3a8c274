//! Rebuilding a position from a recorded action history.

use super::error::ReplayError;
use super::policy::ActionPolicy;
use super::{Action, Position};

/// Apply `actions` in order, starting from `start`.
///
/// Stops at the first rejected action and reports its index.
pub fn replay<I>(
    start: &Position,
    actions: I,
    policy: &ActionPolicy,
) -> Result<Position, ReplayError>
where
    I: IntoIterator<Item = Action>,
{
    let mut position = start.clone();
    for (index, action) in actions.into_iter().enumerate() {
        position = position
            .do_action_with(action, policy)
            .map_err(|error| ReplayError { index, error })?;
    }
    Ok(position)
}
