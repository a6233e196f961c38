//! Game session: the round state machine
//!
//! A session owns the submitted guesses, the in-progress guess, the round
//! state and the player's letter knowledge for one day's puzzle. Every
//! operation is a synchronous reaction to one player event and either
//! completes fully or changes nothing. Operations that are not allowed in
//! the current state are silent no-ops.
//!
//! Board colors are derived: belief colors while playing, ground truth once
//! the round is over. The persisted board is only a cache and is rebuilt
//! from its inputs whenever the session loads.

use super::input::KeyInput;
use super::projector::{project_all, reveal_true};
use super::state::RoundState;
use crate::core::{CellColor, GuessFeedback, Word, compare, is_lowercase_word};
use crate::knowledge::LetterKnowledge;
use crate::storage::{KeyValueStore, entry, keys, load_or, save, save_all};
use crate::wordlists::Dictionary;
use tracing::{debug, info, warn};

/// What happened to a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Wrong state or incomplete guess; nothing changed
    Ignored,
    /// Not in the dictionary; the guess is kept for editing
    InvalidWord {
        /// False when the signal was already up from an earlier attempt
        newly_raised: bool,
    },
    /// Recorded, round continues
    Accepted,
    /// Recorded and equal to the solution
    Won,
    /// Recorded on the final round without matching
    Lost,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn ends_round(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Read-only view of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub solution_length: usize,
    pub max_rounds: usize,
    pub submitted_guesses: Vec<String>,
    pub current_guess: String,
    pub round_state: RoundState,
    pub display_colors: Vec<Vec<CellColor>>,
    pub guess_feedback: Vec<GuessFeedback>,
    pub invalid_word: bool,
}

/// One player's session against a dictionary, persisted through `S`
pub struct GameSession<'a, D: Dictionary + ?Sized, S: KeyValueStore> {
    dictionary: &'a D,
    store: S,
    max_rounds: usize,
    day: i64,
    solution: Word,
    submitted: Vec<String>,
    current: String,
    state: RoundState,
    knowledge: LetterKnowledge,
    display: Vec<Vec<CellColor>>,
    feedback: Vec<GuessFeedback>,
    invalid_word: bool,
}

impl<'a, D: Dictionary + ?Sized, S: KeyValueStore> GameSession<'a, D, S> {
    /// Open the session for `day`
    ///
    /// Stored state is resumed when it belongs to the same day; otherwise the
    /// round starts fresh. `max_rounds` is clamped to at least 1.
    pub fn new(dictionary: &'a D, store: S, day: i64, max_rounds: usize) -> Self {
        let mut session = Self {
            dictionary,
            store,
            max_rounds: max_rounds.max(1),
            day,
            solution: dictionary.solution_for_day(day).clone(),
            submitted: Vec::new(),
            current: String::new(),
            state: RoundState::Playing,
            knowledge: LetterKnowledge::new(),
            display: Vec::new(),
            feedback: Vec::new(),
            invalid_word: false,
        };
        session.on_day_change(day);
        session
    }

    // Queries

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            solution_length: self.solution_length(),
            max_rounds: self.max_rounds,
            submitted_guesses: self.submitted.clone(),
            current_guess: self.current.clone(),
            round_state: self.state,
            display_colors: self.display.clone(),
            guess_feedback: self.feedback.clone(),
            invalid_word: self.invalid_word,
        }
    }

    #[must_use]
    pub fn solution_length(&self) -> usize {
        self.solution.len()
    }

    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub fn day(&self) -> i64 {
        self.day
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn submitted_guesses(&self) -> &[String] {
        &self.submitted
    }

    #[must_use]
    pub fn display_colors(&self) -> &[Vec<CellColor>] {
        &self.display
    }

    #[must_use]
    pub fn guess_feedback(&self) -> &[GuessFeedback] {
        &self.feedback
    }

    #[must_use]
    pub fn invalid_word(&self) -> bool {
        self.invalid_word
    }

    #[must_use]
    pub fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// The solution, once the round is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Word> {
        self.state.is_terminal().then_some(&self.solution)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // Player operations

    /// Append a letter to the in-progress guess
    ///
    /// Uppercase letters are lowercased; anything that is not a letter is
    /// ignored, as is input once the guess is full.
    pub fn add_letter(&mut self, ch: char) {
        if !self.accepts_moves("add_letter") {
            return;
        }
        if !ch.is_ascii_alphabetic() {
            debug!(?ch, "Ignoring non-letter input");
            return;
        }
        if self.current.len() < self.solution_length() {
            self.current.push(ch.to_ascii_lowercase());
        }
    }

    /// Drop the last letter of the in-progress guess
    pub fn remove_letter(&mut self) {
        if !self.accepts_moves("remove_letter") {
            return;
        }
        self.current.pop();
    }

    /// Submit the in-progress guess
    ///
    /// A full-length guess that the dictionary rejects raises the
    /// invalid-word signal and stays in place. An accepted guess is scored,
    /// appended, and may end the round; ending the round replaces every
    /// row's colors with ground truth.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if !self.accepts_moves("submit_guess") || self.current.len() != self.solution_length() {
            return SubmitOutcome::Ignored;
        }

        if !self.dictionary.is_valid_guess(&self.current) {
            let newly_raised = !self.invalid_word;
            self.invalid_word = true;
            debug!(guess = %self.current, "Rejected guess not in word list");
            return SubmitOutcome::InvalidWord { newly_raised };
        }

        let guess = std::mem::take(&mut self.current);
        let comparison = compare(&guess, self.solution.text());
        self.feedback.push(comparison.feedback());
        self.display.push(self.knowledge.project(&guess));
        self.submitted.push(guess);

        let outcome = if comparison.is_solved(self.solution_length()) {
            self.state = RoundState::Won;
            SubmitOutcome::Won
        } else if self.submitted.len() >= self.max_rounds {
            self.state = RoundState::Lost;
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Accepted
        };

        if outcome.ends_round() {
            self.display = reveal_true(&self.submitted, self.solution.text());
            info!(
                day = self.day,
                state = ?self.state,
                rounds = self.submitted.len(),
                "Round finished"
            );
        }

        self.persist();
        outcome
    }

    /// Advance the belief about the letter in a submitted cell and recolor
    /// the whole board
    pub fn change_letter_color(&mut self, row: usize, position: usize) {
        if !self.accepts_moves("change_letter_color") {
            return;
        }
        let Some(letter) = self
            .submitted
            .get(row)
            .and_then(|guess| guess.as_bytes().get(position).copied())
        else {
            debug!(row, position, "Ignoring toggle outside the submitted rows");
            return;
        };

        let current = self.display[row][position];
        self.knowledge.toggle(letter, position, current);
        self.display = project_all(&self.submitted, &self.knowledge);
        self.persist();
    }

    /// Forget every belief and recolor the board
    pub fn clear_letter_colors(&mut self) {
        if !self.accepts_moves("clear_letter_colors") {
            return;
        }
        self.knowledge.reset();
        self.display = project_all(&self.submitted, &self.knowledge);
        self.persist();
    }

    /// Lower the invalid-word signal; called when its flash timer fires
    pub fn clear_invalid_word(&mut self) {
        self.invalid_word = false;
    }

    /// Dispatch one key press
    ///
    /// Returns the submission outcome for `Enter`, `None` for edits.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<SubmitOutcome> {
        match key {
            KeyInput::Letter(ch) => {
                self.add_letter(ch);
                None
            }
            KeyInput::Backspace => {
                self.remove_letter();
                None
            }
            KeyInput::Enter => Some(self.submit_guess()),
        }
    }

    /// Switch to `day`
    ///
    /// A day different from the last one played starts a fresh round for the
    /// new solution. The same day resumes whatever was stored.
    pub fn on_day_change(&mut self, day: i64) {
        let last_played: i64 = load_or(&self.store, keys::LAST_PLAYED_DAY, 0);
        save(&mut self.store, keys::LAST_PLAYED_DAY, &day);

        self.day = day;
        self.solution = self.dictionary.solution_for_day(day).clone();
        self.current.clear();
        self.invalid_word = false;

        if day == last_played {
            self.restore();
        } else {
            info!(day, last_played, "New day, starting a fresh round");
            self.start_fresh();
        }
    }

    // Internals

    fn accepts_moves(&self, operation: &'static str) -> bool {
        if self.state.is_terminal() {
            debug!(operation, state = ?self.state, "Ignoring move after the round ended");
            return false;
        }
        true
    }

    fn start_fresh(&mut self) {
        self.submitted.clear();
        self.state = RoundState::Playing;
        self.knowledge.reset();
        self.feedback.clear();
        self.display.clear();
        self.persist();
    }

    fn restore(&mut self) {
        let submitted: Vec<String> = load_or(&self.store, keys::SUBMITTED_GUESSES, Vec::new());
        let state: RoundState = load_or(&self.store, keys::ROUND_STATE, RoundState::Playing);

        if let Err(reason) = self.check_stored_round(&submitted, state) {
            warn!(day = self.day, reason, "Stored round is inconsistent, starting fresh");
            self.start_fresh();
            return;
        }

        let mut knowledge: LetterKnowledge =
            load_or(&self.store, keys::LETTER_KNOWLEDGE, LetterKnowledge::new());
        knowledge.repair(self.solution_length());

        let stored_feedback: Vec<GuessFeedback> =
            load_or(&self.store, keys::GUESS_FEEDBACK, Vec::new());
        self.feedback = if stored_feedback.len() == submitted.len() {
            stored_feedback
        } else {
            submitted
                .iter()
                .map(|guess| compare(guess, self.solution.text()).feedback())
                .collect()
        };

        self.display = if state.is_terminal() {
            reveal_true(&submitted, self.solution.text())
        } else {
            project_all(&submitted, &knowledge)
        };
        self.submitted = submitted;
        self.state = state;
        self.knowledge = knowledge;

        debug!(day = self.day, rounds = self.submitted.len(), state = ?self.state, "Resumed round");
    }

    /// Reject stored rounds that could not have been produced by play
    fn check_stored_round(&self, submitted: &[String], state: RoundState) -> Result<(), &'static str> {
        let len = self.solution_length();
        if submitted.iter().any(|g| g.len() != len || !is_lowercase_word(g)) {
            return Err("malformed guess");
        }

        let solution = self.solution.text();
        let solved_at = submitted.iter().position(|g| g == solution);
        match state {
            RoundState::Playing if solved_at.is_some() => Err("solved round still playing"),
            RoundState::Playing if submitted.len() >= self.max_rounds => {
                Err("no rounds left while playing")
            }
            RoundState::Won if solved_at != Some(submitted.len().wrapping_sub(1)) => {
                Err("won without the solution")
            }
            RoundState::Lost if submitted.is_empty() || solved_at.is_some() => {
                Err("lost without a losing guess")
            }
            _ => Ok(()),
        }
    }

    /// Write the whole round as a single batch
    fn persist(&mut self) {
        save_all(
            &mut self.store,
            [
                entry(keys::SUBMITTED_GUESSES, &self.submitted),
                entry(keys::ROUND_STATE, &self.state),
                entry(keys::DISPLAY_COLORS, &self.display),
                entry(keys::GUESS_FEEDBACK, &self.feedback),
                entry(keys::LETTER_KNOWLEDGE, &self.knowledge),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::game::projector::reveal_row;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use CellColor::{Absent, Correct, Present, Unknown};
    use serde_json::{Value, json};

    /// Day 0 is "slate", day 1 is "crane"
    fn dictionary() -> WordList {
        WordList::new(
            words_from_slice(&["slate", "crane"]),
            words_from_slice(&["trace", "robot", "audio", "speed", "eerie", "abbey"]),
        )
        .unwrap()
    }

    fn type_word<D: Dictionary + ?Sized, S: KeyValueStore>(session: &mut GameSession<'_, D, S>, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    fn play<D: Dictionary + ?Sized, S: KeyValueStore>(
        session: &mut GameSession<'_, D, S>,
        word: &str,
    ) -> SubmitOutcome {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn new_session_starts_playing() {
        let dict = dictionary();
        let session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.solution_length, 5);
        assert_eq!(snapshot.max_rounds, 6);
        assert_eq!(snapshot.round_state, RoundState::Playing);
        assert!(snapshot.submitted_guesses.is_empty());
        assert!(!snapshot.invalid_word);
        assert_eq!(session.revealed_solution(), None);
    }

    #[test]
    fn typing_is_bounded_by_solution_length() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        type_word(&mut session, "TRACES");
        assert_eq!(session.current_guess(), "trace");

        session.add_letter('1');
        session.remove_letter();
        assert_eq!(session.current_guess(), "trac");

        for _ in 0..10 {
            session.remove_letter();
        }
        assert_eq!(session.current_guess(), "");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        assert_eq!(play(&mut session, "tra"), SubmitOutcome::Ignored);
        assert_eq!(session.current_guess(), "tra");
        assert!(session.submitted_guesses().is_empty());
    }

    #[test]
    fn unknown_word_raises_signal_and_keeps_guess() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        assert_eq!(
            play(&mut session, "qqqqq"),
            SubmitOutcome::InvalidWord { newly_raised: true }
        );
        assert!(session.invalid_word());
        assert_eq!(session.current_guess(), "qqqqq");
        assert!(session.submitted_guesses().is_empty());

        assert_eq!(
            session.submit_guess(),
            SubmitOutcome::InvalidWord { newly_raised: false }
        );

        session.clear_invalid_word();
        assert!(!session.invalid_word());
    }

    #[test]
    fn accepted_guess_records_feedback_and_belief_colors() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        assert_eq!(play(&mut session, "trace"), SubmitOutcome::Accepted);
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.submitted_guesses(), ["trace"]);
        // trace vs slate: a and e correct, t misplaced
        assert_eq!(
            session.guess_feedback(),
            [GuessFeedback {
                correct: 2,
                wrong_position: 1
            }]
        );
        // Belief is still empty, so nothing is colored yet
        assert_eq!(session.display_colors(), [vec![Unknown; 5]]);
    }

    #[test]
    fn winning_guess_ends_round_with_ground_truth() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        play(&mut session, "trace");
        session.change_letter_color(0, 0);
        assert_eq!(play(&mut session, "slate"), SubmitOutcome::Won);

        assert_eq!(session.state(), RoundState::Won);
        assert_eq!(
            session.display_colors(),
            [
                vec![Present, Absent, Correct, Absent, Correct],
                vec![Correct; 5]
            ]
        );
        assert_eq!(session.revealed_solution().map(Word::text), Some("slate"));
    }

    #[test]
    fn win_on_first_round_regardless_of_rounds_left() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 10);
        assert_eq!(play(&mut session, "slate"), SubmitOutcome::Won);
    }

    #[test]
    fn final_miss_loses_and_reveals() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 3);

        assert_eq!(play(&mut session, "robot"), SubmitOutcome::Accepted);
        assert_eq!(play(&mut session, "audio"), SubmitOutcome::Accepted);
        assert_eq!(play(&mut session, "speed"), SubmitOutcome::Lost);

        assert_eq!(session.state(), RoundState::Lost);
        for (row, guess) in session.submitted_guesses().iter().enumerate() {
            assert_eq!(
                session.display_colors()[row],
                reveal_row(guess, "slate")
            );
        }
    }

    #[test]
    fn winning_on_the_last_round_is_a_win() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 2);

        play(&mut session, "robot");
        assert_eq!(play(&mut session, "slate"), SubmitOutcome::Won);
    }

    #[test]
    fn terminal_state_ignores_moves() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "robot");
        play(&mut session, "slate");
        let before = session.snapshot();

        type_word(&mut session, "crane");
        session.remove_letter();
        assert_eq!(session.submit_guess(), SubmitOutcome::Ignored);
        session.change_letter_color(0, 0);
        session.clear_letter_colors();

        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn toggle_recolors_every_row_sharing_the_letter() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 1, 6);

        play(&mut session, "trace");
        play(&mut session, "robot");

        // r: Unknown -> Absent everywhere
        session.change_letter_color(0, 1);
        assert_eq!(session.display_colors()[0][1], Absent);
        assert_eq!(session.display_colors()[1][0], Absent);

        // r: Absent -> Present everywhere
        session.change_letter_color(1, 0);
        assert_eq!(session.display_colors()[0][1], Present);
        assert_eq!(session.display_colors()[1][0], Present);

        // Pinning r at position 1 of row 0 leaves row 1's r merely present
        session.change_letter_color(0, 1);
        assert_eq!(session.display_colors()[0][1], Correct);
        assert_eq!(session.display_colors()[1][0], Present);
    }

    #[test]
    fn toggle_outside_submitted_rows_is_ignored() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "trace");
        let before = session.snapshot();

        session.change_letter_color(1, 0);
        session.change_letter_color(0, 5);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn clear_letter_colors_resets_belief() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "trace");
        play(&mut session, "robot");
        session.change_letter_color(0, 0);
        session.change_letter_color(1, 2);

        session.clear_letter_colors();
        assert_eq!(session.knowledge(), &LetterKnowledge::new());
        assert_eq!(session.display_colors(), [vec![Unknown; 5], vec![Unknown; 5]]);
    }

    #[test]
    fn handle_key_dispatches() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);

        for ch in "slatx".chars() {
            assert_eq!(session.handle_key(KeyInput::Letter(ch)), None);
        }
        session.handle_key(KeyInput::Backspace);
        session.handle_key(KeyInput::Letter('e'));
        assert_eq!(session.handle_key(KeyInput::Enter), Some(SubmitOutcome::Won));
    }

    #[test]
    fn state_survives_reload_on_same_day() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "trace");
        session.change_letter_color(0, 0);
        type_word(&mut session, "rob");
        let before = session.snapshot();

        let resumed = GameSession::new(&dict, session.into_store(), 0, 6);
        let after = resumed.snapshot();
        assert_eq!(after.submitted_guesses, before.submitted_guesses);
        assert_eq!(after.display_colors, before.display_colors);
        assert_eq!(after.guess_feedback, before.guess_feedback);
        assert_eq!(after.round_state, RoundState::Playing);
        // The in-progress guess is not part of stored state
        assert_eq!(after.current_guess, "");
    }

    #[test]
    fn finished_round_survives_reload() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "slate");

        let resumed = GameSession::new(&dict, session.into_store(), 0, 6);
        assert_eq!(resumed.state(), RoundState::Won);
        assert_eq!(resumed.display_colors(), [vec![Correct; 5]]);
    }

    #[test]
    fn new_day_resets_the_round() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "trace");
        session.change_letter_color(0, 0);

        let next = GameSession::new(&dict, session.into_store(), 1, 6);
        assert!(next.submitted_guesses().is_empty());
        assert_eq!(next.state(), RoundState::Playing);
        assert_eq!(next.knowledge(), &LetterKnowledge::new());
        assert!(next.guess_feedback().is_empty());
        assert!(next.display_colors().is_empty());
        assert_eq!(next.store().get(keys::LAST_PLAYED_DAY), Some(json!(1)));
    }

    #[test]
    fn day_change_resets_a_finished_live_session() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "slate");
        assert_eq!(session.state(), RoundState::Won);

        session.on_day_change(1);
        assert_eq!(session.state(), RoundState::Playing);
        assert_eq!(session.day(), 1);
        assert_eq!(play(&mut session, "crane"), SubmitOutcome::Won);
    }

    #[test]
    fn persisted_layout_matches_plain_json() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, MemoryStore::new(), 0, 6);
        play(&mut session, "trace");
        session.change_letter_color(0, 0);
        let store = session.into_store();

        assert_eq!(store.get(keys::SUBMITTED_GUESSES), Some(json!(["trace"])));
        assert_eq!(store.get(keys::ROUND_STATE), Some(json!(0)));
        assert_eq!(store.get(keys::DISPLAY_COLORS), Some(json!([[1, 0, 0, 0, 0]])));
        assert_eq!(store.get(keys::GUESS_FEEDBACK), Some(json!([[2, 1]])));
        assert_eq!(
            store.get(keys::LETTER_KNOWLEDGE).unwrap()["t"],
            json!({"known": true, "letterCount": 0, "correctPositions": []})
        );
    }

    #[test]
    fn stored_colors_are_recomputed_on_load() {
        let dict = dictionary();
        let mut store = MemoryStore::new();
        store.set(keys::LAST_PLAYED_DAY, json!(0)).unwrap();
        store.set(keys::SUBMITTED_GUESSES, json!(["trace"])).unwrap();
        store.set(keys::ROUND_STATE, json!(0)).unwrap();
        store.set(keys::DISPLAY_COLORS, json!([[3, 3, 3, 3, 3]])).unwrap();

        let session = GameSession::new(&dict, store, 0, 6);
        assert_eq!(session.display_colors(), [vec![Unknown; 5]]);
        assert_eq!(session.guess_feedback()[0].correct, 2);
    }

    #[test]
    fn inconsistent_stored_round_starts_fresh() {
        let dict = dictionary();
        for (guesses, state) in [
            (json!(["tr@ce"]), 0),
            (json!(["slate"]), 0),
            (json!(["trace"]), 1),
            (json!([]), 2),
        ] {
            let mut store = MemoryStore::new();
            store.set(keys::SUBMITTED_GUESSES, guesses.clone()).unwrap();
            store.set(keys::ROUND_STATE, json!(state)).unwrap();

            let session = GameSession::new(&dict, store, 0, 6);
            assert!(session.submitted_guesses().is_empty(), "{guesses}");
            assert_eq!(session.state(), RoundState::Playing);
        }
    }

    #[test]
    fn stored_knowledge_is_repaired() {
        let dict = dictionary();
        let mut store = MemoryStore::new();
        store
            .set(
                keys::LETTER_KNOWLEDGE,
                json!({"e": {"known": true, "letterCount": 0, "correctPositions": [4, 12]}}),
            )
            .unwrap();

        let session = GameSession::new(&dict, store, 0, 6);
        let e = session.knowledge().get(b'e').unwrap();
        assert_eq!(e.letter_count, 1);
        assert_eq!(e.correct_positions.len(), 1);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<Value> {
            None
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StorageError> {
            Err(StorageError::io("write", std::io::Error::other("unavailable")))
        }
    }

    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        single_writes: usize,
        batches: usize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Option<Value> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
            self.single_writes += 1;
            self.inner.set(key, value)
        }

        fn set_many(&mut self, entries: Vec<(&str, Value)>) -> Result<(), StorageError> {
            self.batches += 1;
            self.inner.set_many(entries)
        }
    }

    #[test]
    fn each_event_persists_the_round_in_one_batch() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, CountingStore::default(), 0, 6);
        let singles_after_load = session.store().single_writes;
        let batches_after_load = session.store().batches;

        assert_eq!(play(&mut session, "trace"), SubmitOutcome::Accepted);
        assert_eq!(session.store().batches, batches_after_load + 1);

        session.change_letter_color(0, 0);
        session.clear_letter_colors();
        assert_eq!(session.store().batches, batches_after_load + 3);
        assert_eq!(session.store().single_writes, singles_after_load);

        let store = session.into_store();
        assert_eq!(store.get(keys::SUBMITTED_GUESSES), Some(json!(["trace"])));
        assert_eq!(store.get(keys::ROUND_STATE), Some(json!(0)));
    }

    #[test]
    fn unavailable_storage_does_not_affect_play() {
        let dict = dictionary();
        let mut session = GameSession::new(&dict, FailingStore, 0, 6);

        assert_eq!(play(&mut session, "trace"), SubmitOutcome::Accepted);
        session.change_letter_color(0, 0);
        assert_eq!(session.display_colors()[0][0], Absent);
        assert_eq!(play(&mut session, "slate"), SubmitOutcome::Won);
    }
}
