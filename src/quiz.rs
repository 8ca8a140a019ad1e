//! Quiz State
//!
//! Archetype quiz (tally scoring) and the daily knowledge question.

use chrono::NaiveDate;
use reactive_stores::Store;

/// Archetype quiz progress with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct QuizState {
    /// Index of the question on screen
    pub current: usize,
    /// One slot per question; `None` if unanswered or skipped
    pub answers: Vec<Option<usize>>,
    /// Winning archetype index once the quiz is finished
    pub result: Option<usize>,
    /// Number of archetypes answers vote for
    pub categories: usize,
}

impl QuizState {
    pub fn new(question_count: usize, categories: usize) -> Self {
        Self {
            current: 0,
            answers: vec![None; question_count],
            result: None,
            categories,
        }
    }

    fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn answer_for(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Record `option` for the current question and advance
    pub fn answer(&mut self, option: usize) {
        if self.is_finished() || self.current >= self.question_count() {
            return;
        }
        self.answers[self.current] = Some(option);
        self.advance();
    }

    pub fn previous(&mut self) {
        if !self.is_finished() && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Skip is offered past the first question when nothing is recorded yet
    pub fn can_skip(&self) -> bool {
        !self.is_finished() && self.current > 0 && self.answer_for(self.current).is_none()
    }

    pub fn skip(&mut self) {
        if self.can_skip() {
            self.advance();
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.iter_mut().for_each(|slot| *slot = None);
        self.result = None;
    }

    fn advance(&mut self) {
        if self.current + 1 < self.question_count() {
            self.current += 1;
        } else {
            self.result = Some(tally(&self.answers, self.categories));
        }
    }
}

/// Category with the most votes; ties and empty tallies go to the lowest index
pub fn tally(answers: &[Option<usize>], categories: usize) -> usize {
    let mut counts = vec![0usize; categories];
    for option in answers.iter().flatten() {
        if let Some(count) = counts.get_mut(*option) {
            *count += 1;
        }
    }
    let mut best = 0;
    for (idx, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = idx;
        }
    }
    best
}

/// Dot state in the quiz progress row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Done,
    Current,
    Upcoming,
}

pub fn dot_state(index: usize, current: usize) -> DotState {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => DotState::Done,
        std::cmp::Ordering::Equal => DotState::Current,
        std::cmp::Ordering::Greater => DotState::Upcoming,
    }
}

// ========================
// Daily quiz
// ========================

/// Question of the day: char-code sum of the date as "Www Mmm DD YYYY"
pub fn daily_question_index(date: NaiveDate, question_count: usize) -> usize {
    let label = date.format("%a %b %d %Y").to_string();
    let seed: u32 = label.chars().map(|c| c as u32).sum();
    seed as usize % question_count
}

/// How one option of the daily quiz is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Nothing picked yet
    Open,
    /// Picked and right
    Correct,
    /// Picked and wrong
    Wrong,
    /// Not picked, but the right answer
    Revealed,
    /// Not picked, not right
    Dimmed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DailyQuizState {
    pub selected: Option<usize>,
}

impl DailyQuizState {
    /// First selection locks the quiz; returns whether it was accepted
    pub fn select(&mut self, option: usize) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub fn is_correct(&self, correct: usize) -> Option<bool> {
        self.selected.map(|s| s == correct)
    }

    pub fn option_state(&self, option: usize, correct: usize) -> OptionState {
        match self.selected {
            None => OptionState::Open,
            Some(s) if s == option && s == correct => OptionState::Correct,
            Some(s) if s == option => OptionState::Wrong,
            Some(_) if option == correct => OptionState::Revealed,
            Some(_) => OptionState::Dimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_category_wins() {
        for category in 0..5 {
            let mut quiz = QuizState::new(5, 5);
            for _ in 0..5 {
                quiz.answer(category);
            }
            assert_eq!(quiz.result, Some(category));
        }
    }

    #[test]
    fn test_categories_independent_of_question_count() {
        let mut quiz = QuizState::new(3, 5);
        for _ in 0..3 {
            quiz.answer(4);
        }
        assert_eq!(quiz.result, Some(4));

        let mut quiz = QuizState::new(6, 2);
        for option in [1, 1, 0, 1, 0, 1] {
            quiz.answer(option);
        }
        assert_eq!(quiz.result, Some(1));
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut quiz = QuizState::new(5, 5);
        for option in [4, 0, 2, 2, 1] {
            quiz.answer(option);
        }
        assert!(quiz.is_finished());
        quiz.restart();
        assert_eq!(quiz.current, 0);
        assert!(quiz.answers.iter().all(Option::is_none));
        assert_eq!(quiz.result, None);
    }

    #[test]
    fn test_tie_breaks_to_first_index() {
        assert_eq!(tally(&[Some(3), Some(1), Some(3), Some(1), Some(0)], 5), 1);
        assert_eq!(tally(&[None, None], 5), 0);
        assert_eq!(tally(&[Some(4)], 5), 4);
    }

    #[test]
    fn test_previous_and_change_answer() {
        let mut quiz = QuizState::new(5, 5);
        quiz.answer(1);
        quiz.answer(2);
        quiz.previous();
        assert_eq!(quiz.current, 1);
        assert_eq!(quiz.answer_for(1), Some(2));
        quiz.answer(4);
        assert_eq!(quiz.answer_for(1), Some(4));
        assert_eq!(quiz.current, 2);
        quiz.previous();
        quiz.previous();
        quiz.previous();
        assert_eq!(quiz.current, 0);
    }

    #[test]
    fn test_skip_rules() {
        let mut quiz = QuizState::new(3, 5);
        assert!(!quiz.can_skip());
        quiz.answer(0);
        assert!(quiz.can_skip());
        quiz.skip();
        assert_eq!(quiz.current, 2);
        // skipping the last question finishes the quiz
        quiz.skip();
        assert_eq!(quiz.result, Some(0));
    }

    #[test]
    fn test_dot_states() {
        assert_eq!(dot_state(0, 2), DotState::Done);
        assert_eq!(dot_state(2, 2), DotState::Current);
        assert_eq!(dot_state(4, 2), DotState::Upcoming);
    }

    #[test]
    fn test_daily_index_is_stable_per_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let expected = "Mon Oct 19 2026".chars().map(|c| c as u32).sum::<u32>() as usize % 5;
        assert_eq!(daily_question_index(day, 5), expected);
        assert_eq!(daily_question_index(day, 5), daily_question_index(day, 5));
    }

    #[test]
    fn test_daily_quiz_locks_after_first_pick() {
        let mut daily = DailyQuizState::default();
        assert_eq!(daily.option_state(0, 1), OptionState::Open);
        assert!(daily.select(2));
        assert!(!daily.select(1));
        assert_eq!(daily.is_correct(1), Some(false));
        assert_eq!(daily.option_state(2, 1), OptionState::Wrong);
        assert_eq!(daily.option_state(1, 1), OptionState::Revealed);
        assert_eq!(daily.option_state(0, 1), OptionState::Dimmed);
    }
}
