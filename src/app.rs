use std::time::Instant;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::helix::{build_helix, HelixAction, HelixGeometry, HelixSequence};
use crate::lesson::{MatchGame, Quiz, RoundOutcome};
use crate::sequence::{contains_stop, transcribe, translate, Transcription};

pub const DEFAULT_LAB_DNA: &str = "TACGCG";
/// Rotation applied per key press in the helix view, in radians
pub const ROTATION_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Lab,
    Helix,
    Quiz,
    Game,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Lab, Tab::Helix, Tab::Quiz, Tab::Game];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "DNA vs RNA",
            Tab::Lab => "Transcription Lab",
            Tab::Helix => "3D Helix",
            Tab::Quiz => "Knowledge Check",
            Tab::Game => "Match Game",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    fn offset(&self, delta: isize) -> Tab {
        let count = Tab::ALL.len() as isize;
        let index = (self.index() as isize + delta).rem_euclid(count);
        Tab::ALL[index as usize]
    }
}

/// Everything the UI can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    LabInput(char),
    LabBackspace,
    LabClear,
    Helix(HelixAction),
    RotateHelix(f64),
    QuizNextQuestion,
    QuizPrevQuestion,
    QuizNextOption,
    QuizPrevOption,
    QuizSubmit,
    GameStart,
    GameGuess(char),
    GameReset,
}

pub struct App {
    pub tab: Tab,
    pub lab_input: String,
    pub transcription: Transcription,
    pub amino_acids: Vec<&'static str>,
    pub helix: HelixSequence,
    pub helix_geometry: HelixGeometry,
    pub helix_yaw: f64,
    pub quiz: Quiz,
    pub game: MatchGame,
    pub status: String,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new() -> App {
        App::with_lab_input(DEFAULT_LAB_DNA, StdRng::from_entropy())
    }

    pub fn with_lab_input(dna: &str, rng: StdRng) -> App {
        debug!("Creating new App instance with lab input '{dna}'");
        let mut app = App {
            tab: Tab::Overview,
            lab_input: dna.to_uppercase(),
            transcription: Transcription::default(),
            amino_acids: Vec::new(),
            helix: HelixSequence::new(),
            helix_geometry: HelixGeometry::default(),
            helix_yaw: 0.0,
            quiz: Quiz::new(),
            game: MatchGame::new(),
            status: String::new(),
            should_quit: false,
            rng,
        };
        app.update_lab();
        app
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }

    /// Apply an action; `now` times the match game.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) {
        trace!("Dispatching {action:?} on tab {:?}", self.tab);
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::NextTab => self.tab = self.tab.offset(1),
            Action::PrevTab => self.tab = self.tab.offset(-1),
            Action::SelectTab(tab) => self.tab = tab,
            Action::LabInput(c) => {
                self.lab_input.extend(c.to_uppercase());
                self.update_lab();
            }
            Action::LabBackspace => {
                self.lab_input.pop();
                self.update_lab();
            }
            Action::LabClear => {
                self.lab_input.clear();
                self.update_lab();
            }
            Action::Helix(helix_action) => {
                self.helix.apply(helix_action);
                self.helix_geometry = build_helix(self.helix.pairs());
                self.status = format!("Current Sequence Length: {} Base Pairs", self.helix.len());
            }
            Action::RotateHelix(delta) => {
                self.helix_yaw = (self.helix_yaw + delta).rem_euclid(std::f64::consts::TAU);
            }
            Action::QuizNextQuestion => self.quiz.next_question(),
            Action::QuizPrevQuestion => self.quiz.prev_question(),
            Action::QuizNextOption => self.quiz.next_option(),
            Action::QuizPrevOption => self.quiz.prev_option(),
            Action::QuizSubmit => {
                self.quiz.submit();
                self.status = format!("Quiz score: {}/{}", self.quiz.score(), crate::lesson::quiz::QUESTION_COUNT);
            }
            Action::GameStart => {
                let base = self.game.start_round(&mut self.rng, now);
                self.status = format!("Quick! What pairs with {base}?");
            }
            Action::GameGuess(c) => {
                if let Some(outcome) = self.game.guess(c, now) {
                    self.status = match outcome {
                        RoundOutcome::Hit { reaction } => format!("Match! {} ms", reaction.as_millis()),
                        RoundOutcome::Miss { expected, .. } => format!("Oops! The answer was {expected}"),
                    };
                    self.game.start_round(&mut self.rng, now);
                }
            }
            Action::GameReset => {
                self.game.reset();
                self.status = "Game reset".to_string();
            }
        }
    }

    fn update_lab(&mut self) {
        self.transcription = transcribe(&self.lab_input);
        self.amino_acids = if self.transcription.is_valid {
            translate(&self.transcription.rna)
        } else {
            Vec::new()
        };

        self.status = if self.lab_input.is_empty() {
            String::new()
        } else if !self.transcription.is_valid {
            "Invalid DNA character detected! Use only A, T, C, or G.".to_string()
        } else if contains_stop(&self.amino_acids) {
            "STOP codon reached: the protein is finished!".to_string()
        } else {
            String::new()
        };

        trace!(
            "Lab updated: input={} rna={} valid={}",
            self.lab_input,
            self.transcription.rna,
            self.transcription.is_valid
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helix::PairTag;

    fn test_app(dna: &str) -> App {
        App::with_lab_input(dna, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_default_lab() {
        let app = test_app(DEFAULT_LAB_DNA);
        assert_eq!(app.transcription.rna, "AUGCGC");
        assert!(app.transcription.is_valid);
        assert_eq!(app.amino_acids, vec!["Start (Met)", "???"]);
    }

    #[test]
    fn test_lab_typing() {
        let mut app = test_app("");
        for c in "tac gcg uaa".chars() {
            app.dispatch(Action::LabInput(c));
        }
        assert_eq!(app.lab_input, "TAC GCG UAA");
        assert!(!app.transcription.is_valid);
        assert_eq!(app.transcription.rna, "AUGCGC");
        assert!(app.amino_acids.is_empty());
        assert!(app.status.starts_with("Invalid DNA character"));

        app.dispatch(Action::LabClear);
        for c in "TACATT".chars() {
            app.dispatch(Action::LabInput(c));
        }
        assert_eq!(app.amino_acids, vec!["Start (Met)", "STOP"]);
        assert!(app.status.contains("STOP"));

        app.dispatch(Action::LabBackspace);
        assert_eq!(app.amino_acids, vec!["Start (Met)"]);
    }

    #[test]
    fn test_helix_actions_rebuild_geometry() {
        let mut app = test_app("");
        app.dispatch(Action::Helix(HelixAction::Add(PairTag::AT)));
        app.dispatch(Action::Helix(HelixAction::Add(PairTag::GC)));
        assert_eq!(app.helix_geometry.rungs.len(), 2);

        app.dispatch(Action::Helix(HelixAction::Undo));
        assert_eq!(app.helix.pairs(), &[PairTag::AT]);
        assert_eq!(app.helix_geometry.rungs.len(), 1);

        app.dispatch(Action::Helix(HelixAction::Reset));
        app.dispatch(Action::Helix(HelixAction::Undo));
        assert!(app.helix_geometry.is_empty());
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = test_app("");
        app.dispatch(Action::PrevTab);
        assert_eq!(app.tab, Tab::Game);
        app.dispatch(Action::NextTab);
        app.dispatch(Action::NextTab);
        assert_eq!(app.tab, Tab::Lab);
        app.dispatch(Action::SelectTab(Tab::Quiz));
        assert_eq!(app.tab, Tab::Quiz);
    }

    #[test]
    fn test_game_round_flow() {
        let mut app = test_app("");
        let now = Instant::now();
        app.dispatch_at(Action::GameStart, now);
        let prompt = app.game.prompt.unwrap();
        let answer = crate::sequence::dna_to_rna_base(prompt).unwrap();

        app.dispatch_at(Action::GameGuess(answer), now + std::time::Duration::from_millis(120));
        assert_eq!(app.game.score, 1);
        assert_eq!(app.status, "Match! 120 ms");
        assert!(app.game.is_running());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app("");
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
