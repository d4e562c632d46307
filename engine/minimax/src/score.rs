//! Sentinel scores for forced outcomes.
//!
//! A forced win scores [`WIN_SCORE`] where it happens. Every ply it is passed
//! back up, a score above [`DECAY_THRESHOLD`] loses [`DECAY_STEP`] (and a
//! score below `-DECAY_THRESHOLD` gains it), so "win in N" strictly beats
//! "win in N + 2" while both still dominate any heuristic value.

/// Score of a position the searching player has just won.
pub const WIN_SCORE: f64 = 10_000_000.0;

/// Score of a position the opponent has just won.
pub const LOSS_SCORE: f64 = -WIN_SCORE;

/// Score of a full board with no winner.
pub const DRAW_SCORE: f64 = 0.0;

/// Magnitude above which a score is treated as a forced outcome and decays.
pub const DECAY_THRESHOLD: f64 = 100_000.0;

/// Amount a forced outcome decays per ply.
pub const DECAY_STEP: f64 = 100.0;

/// Decay a score returned by a MIN level before a MAX level uses it.
#[inline]
pub fn decay_win(score: f64) -> f64 {
    if score > DECAY_THRESHOLD {
        score - DECAY_STEP
    } else {
        score
    }
}

/// Decay a score returned by a MAX level before a MIN level uses it.
#[inline]
pub fn decay_loss(score: f64) -> f64 {
    if score < -DECAY_THRESHOLD {
        score + DECAY_STEP
    } else {
        score
    }
}

#[inline]
pub fn is_forced_win(score: f64) -> bool {
    score > DECAY_THRESHOLD
}

#[inline]
pub fn is_forced_loss(score: f64) -> bool {
    score < -DECAY_THRESHOLD
}

/// Number of decay steps a forced score has taken, or `None` for a
/// heuristic or draw score.
pub fn decay_steps(score: f64) -> Option<u32> {
    if is_forced_win(score) || is_forced_loss(score) {
        Some(((WIN_SCORE - score.abs()) / DECAY_STEP).round() as u32)
    } else {
        None
    }
}
