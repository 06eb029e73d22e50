use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::{REVEAL_DELAY, ROUND_BUDGET};

/// A hand shape either side can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in on-screen button order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Result of one round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Draw,
    Win,
    Lose,
}

impl RoundOutcome {
    pub fn between(player: Choice, computer: Choice) -> Self {
        if player == computer {
            RoundOutcome::Draw
        } else if player.beats() == computer {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    pub fn score_delta(self) -> i32 {
        match self {
            RoundOutcome::Draw => 0,
            RoundOutcome::Win => 1,
            RoundOutcome::Lose => -1,
        }
    }

    pub fn result_text(self) -> &'static str {
        match self {
            RoundOutcome::Draw => "Draw! 0",
            RoundOutcome::Win => "You Win! +1",
            RoundOutcome::Lose => "You Lose! -1",
        }
    }
}

/// Source of the computer's moves. Swapped for a fixed source in tests.
pub trait ChoiceSource: Send + Sync {
    fn pick(&mut self) -> Choice;
}

/// Uniform random picks over the three choices.
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceSource for RandomChoice {
    fn pick(&mut self) -> Choice {
        Choice::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Choice::Rock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the player to pick.
    #[default]
    Idle,
    /// A round is in flight; the computer's pick is not revealed yet.
    Animating,
    /// Session budget spent. Only a reset is accepted.
    GameOver,
}

/// The two wall-clock windows that drive a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub round_budget: Duration,
    pub reveal_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            round_budget: ROUND_BUDGET,
            reveal_delay: REVEAL_DELAY,
        }
    }
}

/// What a pointer press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Started { player: Choice, computer: Choice },
    Reset,
    Ignored,
}

/// A transition produced by advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Resolved {
        player: Choice,
        computer: Choice,
        outcome: RoundOutcome,
        score: i32,
    },
    Expired {
        final_score: i32,
        rounds_played: u32,
        /// A round was in flight and got thrown away.
        discarded_round: bool,
    },
}

/// Whole-session state. Timestamps are offsets on the app clock.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    score: i32,
    player_choice: Option<Choice>,
    computer_choice: Option<Choice>,
    result_text: String,
    phase: Phase,
    animation_start: Duration,
    session_start: Duration,
    rounds_played: u32,
    timing: Timing,
}

impl GameState {
    pub fn new(now: Duration, timing: Timing) -> Self {
        Self {
            score: 0,
            player_choice: None,
            computer_choice: None,
            result_text: String::new(),
            phase: Phase::Idle,
            animation_start: now,
            session_start: now,
            rounds_played: 0,
            timing,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_choice(&self) -> Option<Choice> {
        self.player_choice
    }

    #[cfg(test)]
    pub fn computer_choice(&self) -> Option<Choice> {
        self.computer_choice
    }

    /// The computer's pick, hidden until the round is revealed.
    pub fn revealed_computer_choice(&self) -> Option<Choice> {
        match self.phase {
            Phase::Animating => None,
            _ => self.computer_choice,
        }
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    #[cfg(test)]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Whole seconds left in the session, floored at zero.
    pub fn remaining_seconds(&self, now: Duration) -> u64 {
        let elapsed = now.saturating_sub(self.session_start).as_secs();
        self.timing.round_budget.as_secs().saturating_sub(elapsed)
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.session_start) >= self.timing.round_budget
    }

    /// Feed one pointer press. `hit` is the button under the pointer, if any.
    pub fn press(
        &mut self,
        hit: Option<Choice>,
        now: Duration,
        source: &mut dyn ChoiceSource,
    ) -> Press {
        match self.phase {
            Phase::GameOver => {
                self.reset(now);
                Press::Reset
            }
            Phase::Animating => Press::Ignored,
            Phase::Idle => {
                let Some(player) = hit else {
                    return Press::Ignored;
                };
                if self.is_expired(now) {
                    return Press::Ignored;
                }
                let computer = source.pick();
                self.player_choice = Some(player);
                self.computer_choice = Some(computer);
                self.animation_start = now;
                self.result_text.clear();
                self.phase = Phase::Animating;
                Press::Started { player, computer }
            }
        }
    }

    /// Step the clock. Expiry is checked before the reveal, so a round still
    /// in flight when the budget runs out is discarded unscored.
    pub fn advance(&mut self, now: Duration) -> Option<Advance> {
        if self.phase == Phase::GameOver {
            return None;
        }

        if self.is_expired(now) {
            let discarded_round = self.phase == Phase::Animating;
            if discarded_round {
                self.player_choice = None;
                self.computer_choice = None;
            }
            self.phase = Phase::GameOver;
            return Some(Advance::Expired {
                final_score: self.score,
                rounds_played: self.rounds_played,
                discarded_round,
            });
        }

        if self.phase != Phase::Animating
            || now.saturating_sub(self.animation_start) < self.timing.reveal_delay
        {
            return None;
        }

        let (Some(player), Some(computer)) = (self.player_choice, self.computer_choice) else {
            self.phase = Phase::Idle;
            return None;
        };

        let outcome = RoundOutcome::between(player, computer);
        self.score += outcome.score_delta();
        self.result_text = outcome.result_text().to_string();
        self.rounds_played += 1;
        self.phase = Phase::Idle;

        Some(Advance::Resolved {
            player,
            computer,
            outcome,
            score: self.score,
        })
    }

    /// Start a fresh session window at `now`, keeping the timing.
    pub fn reset(&mut self, now: Duration) {
        *self = Self::new(now, self.timing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChoice(Choice);

    impl ChoiceSource for FixedChoice {
        fn pick(&mut self) -> Choice {
            self.0
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn fresh() -> GameState {
        GameState::new(Duration::ZERO, Timing::default())
    }

    #[test]
    fn equal_choices_draw() {
        for choice in Choice::ALL {
            let outcome = RoundOutcome::between(choice, choice);
            assert_eq!(outcome, RoundOutcome::Draw);
            assert_eq!(outcome.score_delta(), 0);
        }
    }

    #[test]
    fn winning_pairs_score_plus_one() {
        let wins = [
            (Choice::Rock, Choice::Scissors),
            (Choice::Paper, Choice::Rock),
            (Choice::Scissors, Choice::Paper),
        ];
        for (player, computer) in wins {
            let outcome = RoundOutcome::between(player, computer);
            assert_eq!(outcome, RoundOutcome::Win, "{player} vs {computer}");
            assert_eq!(outcome.score_delta(), 1);
        }
    }

    #[test]
    fn losing_pairs_score_minus_one() {
        let losses = [
            (Choice::Scissors, Choice::Rock),
            (Choice::Rock, Choice::Paper),
            (Choice::Paper, Choice::Scissors),
        ];
        for (player, computer) in losses {
            let outcome = RoundOutcome::between(player, computer);
            assert_eq!(outcome, RoundOutcome::Lose, "{player} vs {computer}");
            assert_eq!(outcome.score_delta(), -1);
        }
    }

    #[test]
    fn dominance_is_anti_symmetric() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                if RoundOutcome::between(a, b) == RoundOutcome::Win {
                    assert_eq!(RoundOutcome::between(b, a), RoundOutcome::Lose);
                }
            }
        }
    }

    #[test]
    fn random_source_only_yields_known_choices() {
        let mut source = RandomChoice::new();
        for _ in 0..100 {
            assert!(Choice::ALL.contains(&source.pick()));
        }
    }

    #[test]
    fn press_on_button_starts_round() {
        let mut game = fresh();
        let press = game.press(Some(Choice::Rock), ms(100), &mut FixedChoice(Choice::Paper));

        assert_eq!(
            press,
            Press::Started {
                player: Choice::Rock,
                computer: Choice::Paper
            }
        );
        assert_eq!(game.phase(), Phase::Animating);
        assert_eq!(game.player_choice(), Some(Choice::Rock));
        assert_eq!(game.computer_choice(), Some(Choice::Paper));
        assert_eq!(game.revealed_computer_choice(), None);
        assert_eq!(game.result_text(), "");
    }

    #[test]
    fn press_outside_buttons_is_ignored() {
        let mut game = fresh();
        let press = game.press(None, ms(100), &mut FixedChoice(Choice::Rock));

        assert_eq!(press, Press::Ignored);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.player_choice(), None);
        assert_eq!(game.computer_choice(), None);
    }

    #[test]
    fn press_while_animating_keeps_choices() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(0), &mut FixedChoice(Choice::Paper));
        let press = game.press(Some(Choice::Scissors), ms(200), &mut FixedChoice(Choice::Rock));

        assert_eq!(press, Press::Ignored);
        assert_eq!(game.player_choice(), Some(Choice::Rock));
        assert_eq!(game.computer_choice(), Some(Choice::Paper));
    }

    #[test]
    fn reveal_waits_for_delay() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(0), &mut FixedChoice(Choice::Scissors));

        assert_eq!(game.advance(ms(599)), None);
        assert_eq!(game.phase(), Phase::Animating);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn rock_beats_forced_scissors_after_reveal() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(0), &mut FixedChoice(Choice::Scissors));

        let advance = game.advance(ms(600));
        assert_eq!(
            advance,
            Some(Advance::Resolved {
                player: Choice::Rock,
                computer: Choice::Scissors,
                outcome: RoundOutcome::Win,
                score: 1,
            })
        );
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 1);
        assert!(game.result_text().contains("Win"));
        assert_eq!(game.revealed_computer_choice(), Some(Choice::Scissors));

        // Further frames do not score again.
        assert_eq!(game.advance(ms(1200)), None);
        assert_eq!(game.score(), 1);
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn paper_draws_forced_paper() {
        let mut game = fresh();
        game.press(Some(Choice::Paper), ms(0), &mut FixedChoice(Choice::Paper));
        game.advance(ms(600));

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert!(game.result_text().contains("Draw"));
    }

    #[test]
    fn losing_round_goes_negative() {
        let mut game = fresh();
        game.press(Some(Choice::Scissors), ms(0), &mut FixedChoice(Choice::Rock));
        game.advance(ms(700));

        assert_eq!(game.score(), -1);
        assert_eq!(game.result_text(), "You Lose! -1");
    }

    #[test]
    fn next_round_clears_previous_result() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(0), &mut FixedChoice(Choice::Scissors));
        game.advance(ms(600));
        game.press(Some(Choice::Paper), ms(1000), &mut FixedChoice(Choice::Rock));

        assert_eq!(game.result_text(), "");
        assert_eq!(game.phase(), Phase::Animating);
    }

    #[test]
    fn remaining_time_counts_down_in_whole_seconds() {
        let game = fresh();
        assert_eq!(game.remaining_seconds(ms(0)), 30);
        assert_eq!(game.remaining_seconds(ms(999)), 30);
        assert_eq!(game.remaining_seconds(ms(1000)), 29);
        assert_eq!(game.remaining_seconds(ms(29_999)), 1);
        assert_eq!(game.remaining_seconds(ms(30_000)), 0);
        assert_eq!(game.remaining_seconds(ms(90_000)), 0);
    }

    #[test]
    fn idle_session_expires_after_budget() {
        let mut game = fresh();
        assert_eq!(game.advance(ms(29_999)), None);

        let advance = game.advance(ms(30_000));
        assert_eq!(
            advance,
            Some(Advance::Expired {
                final_score: 0,
                rounds_played: 0,
                discarded_round: false,
            })
        );
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn expiry_discards_round_in_flight() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(29_800), &mut FixedChoice(Choice::Scissors));

        let advance = game.advance(ms(30_500));
        assert_eq!(
            advance,
            Some(Advance::Expired {
                final_score: 0,
                rounds_played: 0,
                discarded_round: true,
            })
        );
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.score(), 0);
        assert_eq!(game.player_choice(), None);
        assert_eq!(game.computer_choice(), None);
    }

    #[test]
    fn game_over_ignores_clock() {
        let mut game = fresh();
        game.advance(ms(30_000));
        assert_eq!(game.advance(ms(60_000)), None);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn expired_but_not_advanced_ignores_buttons() {
        let mut game = fresh();
        let press = game.press(Some(Choice::Rock), ms(30_000), &mut FixedChoice(Choice::Rock));

        assert_eq!(press, Press::Ignored);
        assert_eq!(game.player_choice(), None);
    }

    #[test]
    fn any_press_during_game_over_resets() {
        let mut game = fresh();
        game.press(Some(Choice::Rock), ms(0), &mut FixedChoice(Choice::Scissors));
        game.advance(ms(600));
        game.advance(ms(30_000));
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.score(), 1);

        let press = game.press(None, ms(31_000), &mut FixedChoice(Choice::Rock));
        assert_eq!(press, Press::Reset);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.result_text(), "");
        assert_eq!(game.player_choice(), None);
        assert_eq!(game.computer_choice(), None);
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.remaining_seconds(ms(31_000)), 30);

        // The fresh window ends 30 s after the reset, not after startup.
        assert_eq!(game.advance(ms(60_999)), None);
        assert!(matches!(game.advance(ms(61_000)), Some(Advance::Expired { .. })));
    }

    #[test]
    fn custom_timing_is_honoured() {
        let timing = Timing {
            round_budget: Duration::from_secs(5),
            reveal_delay: ms(100),
        };
        let mut game = GameState::new(ms(1000), timing);
        game.press(Some(Choice::Paper), ms(1000), &mut FixedChoice(Choice::Rock));

        assert!(game.advance(ms(1100)).is_some());
        assert_eq!(game.score(), 1);
        assert_eq!(game.remaining_seconds(ms(1000)), 5);
        assert!(game.is_expired(ms(6000)));
    }
}
