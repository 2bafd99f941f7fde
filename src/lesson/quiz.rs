//! Knowledge check questions and their grading state.

use log::debug;

pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
    pub praise: &'static str,
    pub hint: &'static str,
}

pub const QUESTION_COUNT: usize = 2;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "Which base is found in RNA but NOT in DNA?",
        options: &["Adenine", "Thymine", "Uracil", "Guanine"],
        answer: 2,
        praise: "Correct! Uracil replaces Thymine in RNA.",
        hint: "Try again! Look at the red card above.",
    },
    Question {
        prompt: "If DNA is the 'Master Plan', what is RNA?",
        options: &["The Brick", "The Photocopy/Messenger", "The Builder", "The Cement"],
        answer: 1,
        praise: "Correct! It carries the message out of the nucleus.",
        hint: "Not quite.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Which question is focused, which option each question has highlighted and
/// the grade of each submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub current: usize,
    pub highlighted: [usize; QUESTION_COUNT],
    pub feedback: [Option<Feedback>; QUESTION_COUNT],
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Quiz {
            current: 0,
            highlighted: [0; QUESTION_COUNT],
            feedback: [None; QUESTION_COUNT],
        }
    }

    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    pub fn next_question(&mut self) {
        self.current = (self.current + 1) % QUESTION_COUNT;
    }

    pub fn prev_question(&mut self) {
        self.current = if self.current == 0 { QUESTION_COUNT - 1 } else { self.current - 1 };
    }

    pub fn next_option(&mut self) {
        let count = self.question().options.len();
        self.highlighted[self.current] = (self.highlighted[self.current] + 1) % count;
    }

    pub fn prev_option(&mut self) {
        let count = self.question().options.len();
        let selected = &mut self.highlighted[self.current];
        *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
    }

    /// Grade the highlighted option of the focused question
    pub fn submit(&mut self) -> Feedback {
        let question = self.question();
        let choice = self.highlighted[self.current];
        let feedback = if choice == question.answer {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        debug!("Quiz question {} answered '{}': {feedback:?}", self.current + 1, question.options[choice]);
        self.feedback[self.current] = Some(feedback);
        feedback
    }

    pub fn feedback_text(&self, index: usize) -> Option<&'static str> {
        self.feedback[index].map(|feedback| match feedback {
            Feedback::Correct => QUESTIONS[index].praise,
            Feedback::Incorrect => QUESTIONS[index].hint,
        })
    }

    pub fn score(&self) -> usize {
        self.feedback
            .iter()
            .filter(|feedback| **feedback == Some(Feedback::Correct))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answers() {
        let mut quiz = Quiz::new();
        quiz.next_option();
        quiz.next_option();
        assert_eq!(quiz.submit(), Feedback::Correct);
        assert_eq!(quiz.feedback_text(0), Some("Correct! Uracil replaces Thymine in RNA."));

        quiz.next_question();
        quiz.next_option();
        assert_eq!(quiz.submit(), Feedback::Correct);
        assert_eq!(quiz.score(), 2);
    }

    #[test]
    fn test_wrong_answer_then_retry() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.submit(), Feedback::Incorrect);
        assert_eq!(quiz.feedback_text(0), Some("Try again! Look at the red card above."));
        assert_eq!(quiz.score(), 0);

        quiz.prev_option();
        quiz.prev_option();
        assert_eq!(quiz.highlighted[0], 2);
        assert_eq!(quiz.submit(), Feedback::Correct);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_question_navigation_wraps() {
        let mut quiz = Quiz::new();
        quiz.prev_question();
        assert_eq!(quiz.current, 1);
        quiz.next_question();
        assert_eq!(quiz.current, 0);
        assert_eq!(quiz.feedback_text(1), None);
    }
}
