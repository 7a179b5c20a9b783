// Computer targeting: uniform over the cells not yet fired upon.

use crate::board::Board;
use crate::common::GameError;
use crate::random::RandomSource;

/// Draw a uniform (row, col) on `board`, redrawing while the cell has already
/// been fired upon.
///
/// Fails with `NoTargetsLeft` on a fully fired board rather than spinning.
pub fn select_target<R: RandomSource + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<(usize, usize), GameError> {
    if !board.has_unfired() {
        return Err(GameError::NoTargetsLeft);
    }
    let size = board.size();
    loop {
        let row = rng.below(size);
        let col = rng.below(size);
        if !board.cell(row, col)?.is_fired() {
            return Ok((row, col));
        }
    }
}
