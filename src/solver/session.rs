//! One solving session
//!
//! A session owns a private snapshot of the dictionary's bank and its own candidate set,
//! so consecutive sessions never share mutable state. Each round ranks the bank against
//! the current candidates, guesses the top word, and narrows the candidates with the
//! feedback the guess earned against the secret. A word is never played twice in one
//! session.

use super::candidates::CandidateSet;
use super::letters::LetterTally;
use super::scoring::compute_scores;
use crate::bank::{Dictionary, WordBank};
use crate::core::{Feedback, Word};
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Tunable solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Give up after this many guesses
    pub max_rounds: usize,
    /// Add the letter-frequency bonus on top of the primary score
    pub letter_bonus: bool,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        Self {
            max_rounds,
            letter_bonus: true,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initialized,
    Guessing,
    Found,
    RoundLimitReached,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The secret was guessed in `rounds` guesses
    Found { rounds: usize },
    /// The round budget ran out; the solver gave up
    RoundLimitReached { rounds: usize },
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub const fn rounds(self) -> usize {
        match self {
            Self::Found { rounds } | Self::RoundLimitReached { rounds } => rounds,
        }
    }
}

/// Everything observed in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub guess: Word,
    /// Feedback of the guess against the secret
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub secret: Word,
    pub outcome: SessionOutcome,
    pub rounds: Vec<RoundReport>,
}

/// Guessing session for a single secret word
#[derive(Debug, Clone)]
pub struct Session {
    bank: WordBank,
    candidates: CandidateSet,
    secret: Word,
    config: SolverConfig,
    played: FxHashSet<Word>,
    round: usize,
    state: SessionState,
}

impl Session {
    /// Start a session with a fresh copy of the dictionary's bank and answer set
    ///
    /// The secret need not be an answer word; if it is not, the candidate set may run
    /// empty and the session will end at the round limit.
    #[must_use]
    pub fn new(dictionary: &Dictionary, secret: Word, config: SolverConfig) -> Self {
        Self {
            bank: dictionary.bank().snapshot(),
            candidates: CandidateSet::full(dictionary.answers()),
            secret,
            config,
            played: FxHashSet::default(),
            round: 0,
            state: SessionState::Initialized,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The session's bank as ranked in the latest round
    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(
            self.state,
            SessionState::Found | SessionState::RoundLimitReached
        )
    }

    /// Final outcome, once the session has finished
    #[must_use]
    pub const fn outcome(&self) -> Option<SessionOutcome> {
        match self.state {
            SessionState::Found => Some(SessionOutcome::Found { rounds: self.round }),
            SessionState::RoundLimitReached => {
                Some(SessionOutcome::RoundLimitReached { rounds: self.round })
            }
            SessionState::Initialized | SessionState::Guessing => None,
        }
    }

    /// Play one round
    ///
    /// Returns `None` once the session has finished.
    pub fn step(&mut self) -> Option<RoundReport> {
        if self.is_finished() {
            return None;
        }
        if self.round >= self.config.max_rounds {
            self.give_up();
            return None;
        }
        self.state = SessionState::Guessing;

        let Some(guess) = self.next_guess() else {
            self.give_up();
            return None;
        };
        self.round += 1;
        self.played.insert(guess);

        let feedback = Feedback::compute(&self.secret, &guess);
        let candidates_before = self.candidates.len();
        self.candidates = std::mem::take(&mut self.candidates).narrow(&guess, &self.secret);
        let candidates_after = self.candidates.len();

        debug!(
            "round {}: guessed {guess} scoring {} ({candidates_before} -> {candidates_after} candidates)",
            self.round,
            feedback.score()
        );

        if feedback.is_solved() {
            self.state = SessionState::Found;
        } else if self.round >= self.config.max_rounds {
            self.give_up();
        }

        Some(RoundReport {
            round: self.round,
            guess,
            feedback,
            candidates_before,
            candidates_after,
        })
    }

    /// Play rounds until the secret is found or the round limit is reached
    #[must_use]
    pub fn run(mut self) -> SessionSummary {
        let mut rounds = Vec::new();
        while let Some(report) = self.step() {
            rounds.push(report);
        }
        SessionSummary {
            secret: self.secret,
            outcome: self
                .outcome()
                .unwrap_or(SessionOutcome::RoundLimitReached { rounds: self.round }),
            rounds,
        }
    }

    /// Pick the guess for the coming round
    ///
    /// A lone remaining candidate is guessed directly. Otherwise the bank is ranked
    /// against the candidates, with the letter bonus layered on top when enabled, and
    /// the best word not yet played is chosen. `None` once every word has been played.
    fn next_guess(&mut self) -> Option<Word> {
        if let Some(&only) = self.candidates.sole() {
            return Some(only);
        }

        compute_scores(&mut self.bank, self.candidates.words());
        if self.config.letter_bonus {
            LetterTally::from_words(self.candidates.words()).apply_bonus(&mut self.bank);
        }
        self.bank
            .ranked()
            .iter()
            .find(|entry| !self.played.contains(&entry.word))
            .map(|entry| entry.word)
    }

    fn give_up(&mut self) {
        warn!(
            "gave up on {} after {} rounds ({} candidates left)",
            self.secret,
            self.round,
            self.candidates.len()
        );
        self.state = SessionState::RoundLimitReached;
    }
}

/// Run a complete session for `secret`
#[must_use]
pub fn solve(dictionary: &Dictionary, secret: Word, config: SolverConfig) -> SessionSummary {
    Session::new(dictionary, secret, config).run()
}
