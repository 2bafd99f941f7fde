//! Reaction-time matching game: a DNA base flashes up and the player types the
//! RNA base that pairs with it as fast as they can.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::Rng;

use crate::sequence::dna_to_rna_base;

const DNA_BASES: [char; 4] = ['A', 'T', 'G', 'C'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Hit { reaction: Duration },
    Miss { expected: char, guessed: char },
}

#[derive(Debug, Clone, Default)]
pub struct MatchGame {
    pub prompt: Option<char>,
    prompt_shown_at: Option<Instant>,
    pub score: u32,
    pub rounds: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub last_reaction: Option<Duration>,
    pub best_reaction: Option<Duration>,
    pub last_outcome: Option<RoundOutcome>,
}

impl MatchGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a fresh DNA base, timing from `now`
    pub fn start_round<R: Rng>(&mut self, rng: &mut R, now: Instant) -> char {
        let base = DNA_BASES[rng.gen_range(0..DNA_BASES.len())];
        self.prompt = Some(base);
        self.prompt_shown_at = Some(now);
        trace!("Match game round {} shows {base}", self.rounds + 1);
        base
    }

    /// Grade the player's RNA base against the current prompt.
    ///
    /// Returns `None` when no round is running.
    pub fn guess(&mut self, rna_base: char, now: Instant) -> Option<RoundOutcome> {
        let prompt = self.prompt.take()?;
        let shown_at = self.prompt_shown_at.take().unwrap_or(now);
        let guessed = rna_base.to_ascii_uppercase();
        // prompt is always drawn from DNA_BASES
        let expected = dna_to_rna_base(prompt).unwrap_or('?');

        self.rounds += 1;
        let outcome = if guessed == expected {
            let reaction = now.saturating_duration_since(shown_at);
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            self.last_reaction = Some(reaction);
            self.best_reaction = Some(self.best_reaction.map_or(reaction, |best| best.min(reaction)));
            RoundOutcome::Hit { reaction }
        } else {
            self.streak = 0;
            RoundOutcome::Miss { expected, guessed }
        };

        debug!("Match game round {}: {outcome:?}", self.rounds);
        self.last_outcome = Some(outcome);
        Some(outcome)
    }

    pub fn is_running(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn partner(base: char) -> char {
        dna_to_rna_base(base).unwrap()
    }

    #[test]
    fn test_prompt_is_a_dna_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = MatchGame::new();
        for _ in 0..20 {
            let base = game.start_round(&mut rng, Instant::now());
            assert!(DNA_BASES.contains(&base));
        }
    }

    #[test]
    fn test_hit_records_reaction_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = MatchGame::new();
        let shown = Instant::now();
        let base = game.start_round(&mut rng, shown);

        let outcome = game.guess(partner(base).to_ascii_lowercase(), shown + Duration::from_millis(450));
        assert_eq!(outcome, Some(RoundOutcome::Hit { reaction: Duration::from_millis(450) }));
        assert_eq!(game.score, 1);
        assert_eq!(game.streak, 1);
        assert_eq!(game.best_reaction, Some(Duration::from_millis(450)));
        assert!(!game.is_running());

        let base = game.start_round(&mut rng, shown);
        game.guess(partner(base), shown + Duration::from_millis(300));
        assert_eq!(game.best_reaction, Some(Duration::from_millis(300)));
        assert_eq!(game.best_streak, 2);
    }

    #[test]
    fn test_miss_breaks_streak() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = MatchGame::new();
        let now = Instant::now();

        let base = game.start_round(&mut rng, now);
        game.guess(partner(base), now);
        let base = game.start_round(&mut rng, now);
        let outcome = game.guess('T', now);

        assert_eq!(outcome, Some(RoundOutcome::Miss { expected: partner(base), guessed: 'T' }));
        assert_eq!(game.streak, 0);
        assert_eq!(game.best_streak, 1);
        assert_eq!(game.score, 1);
        assert_eq!(game.rounds, 2);
    }

    #[test]
    fn test_guess_without_round() {
        let mut game = MatchGame::new();
        assert_eq!(game.guess('A', Instant::now()), None);
        assert_eq!(game.rounds, 0);
    }
}
