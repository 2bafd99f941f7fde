//! Key bindings: translate terminal key presses into app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, Tab, ROTATION_STEP};
use crate::helix::{HelixAction, PairTag};

pub fn key_to_action(tab: Tab, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::NextTab),
        KeyCode::BackTab => return Some(Action::PrevTab),
        KeyCode::F(n @ 1..=5) => return Some(Action::SelectTab(Tab::ALL[n as usize - 1])),
        _ => {}
    }

    match tab {
        // every character is lab input so students can see invalid bases flagged
        Tab::Lab => match key.code {
            KeyCode::Char(c) => Some(Action::LabInput(c)),
            KeyCode::Backspace => Some(Action::LabBackspace),
            KeyCode::Delete => Some(Action::LabClear),
            _ => None,
        },
        Tab::Helix => match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Helix(HelixAction::Add(PairTag::AT))),
            KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::Helix(HelixAction::Add(PairTag::TA))),
            KeyCode::Char('g') | KeyCode::Char('G') => Some(Action::Helix(HelixAction::Add(PairTag::GC))),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Helix(HelixAction::Add(PairTag::CG))),
            KeyCode::Char('u') | KeyCode::Backspace => Some(Action::Helix(HelixAction::Undo)),
            KeyCode::Char('r') => Some(Action::Helix(HelixAction::Reset)),
            KeyCode::Left => Some(Action::RotateHelix(-ROTATION_STEP)),
            KeyCode::Right => Some(Action::RotateHelix(ROTATION_STEP)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Tab::Quiz => match key.code {
            KeyCode::Up => Some(Action::QuizPrevOption),
            KeyCode::Down => Some(Action::QuizNextOption),
            KeyCode::Left => Some(Action::QuizPrevQuestion),
            KeyCode::Right => Some(Action::QuizNextQuestion),
            KeyCode::Enter => Some(Action::QuizSubmit),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Tab::Game => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::GameStart),
            KeyCode::Backspace => Some(Action::GameReset),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::GameGuess(c)),
            _ => None,
        },
        Tab::Overview => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}
