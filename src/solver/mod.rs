//! Scoring and elimination engine
//!
//! Ranks the bank by aggregate match score, breaks ties with letter frequency,
//! and narrows the candidate answers round by round.

mod candidates;
mod letters;
mod openers;
mod scoring;
mod session;

pub use candidates::CandidateSet;
pub use letters::{BONUS_LETTERS, LetterTally};
pub use openers::{Opener, best_openers};
pub use scoring::{compute_scores, compute_second_scores};
pub use session::{
    RoundReport, Session, SessionOutcome, SessionState, SessionSummary, SolverConfig, solve,
};
