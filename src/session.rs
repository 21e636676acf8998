use crate::bank::QuestionBank;
use crate::logger;
use crate::models::{AnswerRecord, Question, Resolution};
use crate::snapshot::{Results, ReviewEntry, Snapshot};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

pub const TIME_LIMIT_SECONDS: u64 = 30;

/// One pass through a shuffled copy of the question bank.
///
/// The session never reads a clock: every operation that depends on time
/// takes `now` from the caller, and nothing here schedules itself.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    order: Vec<Question>,
    current_index: usize,
    completed: bool,
    score: usize,
    // answer and duration share one entry so their key sets cannot diverge
    resolutions: BTreeMap<usize, Resolution>,
    quiz_started_at: Instant,
    question_started_at: Instant,
    total_elapsed: Duration,
    time_limit: Duration,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, now: Instant) -> Self {
        Self::with_rng(bank, now, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(bank: QuestionBank, now: Instant, rng: &mut R) -> Self {
        let mut session = Self {
            order: Vec::with_capacity(bank.len()),
            bank,
            current_index: 0,
            completed: false,
            score: 0,
            resolutions: BTreeMap::new(),
            quiz_started_at: now,
            question_started_at: now,
            total_elapsed: Duration::ZERO,
            time_limit: Duration::from_secs(TIME_LIMIT_SECONDS),
        };
        session.restart_with_rng(now, rng);
        session
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn restart(&mut self, now: Instant) {
        self.restart_with_rng(now, &mut rand::thread_rng());
    }

    /// Reshuffles the bank and discards every piece of progress.
    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        let mut order = self.bank.questions().to_vec();
        order.shuffle(rng);

        self.order = order;
        self.current_index = 0;
        self.completed = false;
        self.score = 0;
        self.resolutions.clear();
        self.quiz_started_at = now;
        self.question_started_at = now;
        self.total_elapsed = Duration::ZERO;

        logger::log(&format!(
            "Quiz started with {} questions, {}s per question",
            self.order.len(),
            self.time_limit.as_secs()
        ));
    }

    pub fn order(&self) -> &[Question] {
        &self.order
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn current_question(&self) -> Option<&Question> {
        debug_assert!(
            !self.completed,
            "current_question called on a completed quiz"
        );
        if self.completed {
            return None;
        }
        self.order.get(self.current_index)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolutions.contains_key(&self.current_index)
    }

    pub fn resolution(&self, index: usize) -> Option<&Resolution> {
        self.resolutions.get(&index)
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.resolutions.get(&index).map(|r| &r.answer)
    }

    pub fn duration(&self, index: usize) -> Option<Duration> {
        self.resolutions.get(&index).map(|r| r.duration)
    }

    pub fn resolved_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.resolutions.keys().copied()
    }

    pub fn elapsed_for_current_question(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.question_started_at)
    }

    pub fn remaining_for_current_question(&self, now: Instant) -> Duration {
        self.time_limit
            .saturating_sub(self.elapsed_for_current_question(now))
    }

    /// Time that was left on the clock when the current question was
    /// resolved, or `None` while it is still open.
    pub fn remaining_at_resolution(&self) -> Option<Duration> {
        self.resolution(self.current_index)
            .map(|r| self.time_limit.saturating_sub(r.duration))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining_for_current_question(now).is_zero()
    }

    /// Live while the quiz runs, frozen at the moment of completion.
    pub fn total_elapsed(&self, now: Instant) -> Duration {
        if self.completed {
            self.total_elapsed
        } else {
            now.saturating_duration_since(self.quiz_started_at)
        }
    }

    /// Records `option` for the current question and returns whether it was
    /// correct. Does not advance, so the caller can show feedback first.
    pub fn submit_answer(&mut self, option: &str, now: Instant) -> bool {
        if !self.can_resolve("submit_answer") {
            return false;
        }

        let question = self.order[self.current_index];
        let answer = AnswerRecord::Answered(option.to_string());
        let correct = answer.is_correct_for(&question);
        if correct {
            self.score += 1;
        }

        let duration = self.elapsed_for_current_question(now);
        self.resolve(answer, duration);

        logger::log(&format!(
            "Question {} answered '{}' in {:.1}s (correct: {}, score: {})",
            self.current_index + 1,
            option,
            duration.as_secs_f64(),
            correct,
            self.score
        ));

        correct
    }

    pub fn skip_current(&mut self, now: Instant) {
        if !self.can_resolve("skip_current") {
            return;
        }

        let duration = self.elapsed_for_current_question(now);
        self.resolve(AnswerRecord::Skipped, duration);
        logger::log(&format!(
            "Question {} skipped after {:.1}s",
            self.current_index + 1,
            duration.as_secs_f64()
        ));
        self.advance(now);
    }

    /// Resolves the current question as timed out and moves on. The recorded
    /// duration is the time limit, however late the caller noticed.
    pub fn expire_current(&mut self, now: Instant) {
        if !self.can_resolve("expire_current") {
            return;
        }
        let expired = self.is_expired(now);
        debug_assert!(expired, "expire_current called before the time limit");
        if !expired {
            return;
        }

        self.resolve(AnswerRecord::Expired, self.time_limit);
        logger::log(&format!("Question {} time expired", self.current_index + 1));
        self.advance(now);
    }

    pub fn advance(&mut self, now: Instant) {
        let ok = !self.completed && self.is_resolved();
        if !ok {
            logger::log("advance called on an unresolved question or a completed quiz");
        }
        debug_assert!(ok, "advance called on an unresolved question or a completed quiz");
        if !ok {
            return;
        }

        self.current_index += 1;
        if self.current_index == self.order.len() {
            self.completed = true;
            self.total_elapsed = now.saturating_duration_since(self.quiz_started_at);
            logger::log(&format!(
                "Quiz completed: {}/{} in {:.1}s",
                self.score,
                self.order.len(),
                self.total_elapsed.as_secs_f64()
            ));
        } else {
            self.question_started_at = now;
            logger::log(&format!("Advanced to question {}", self.current_index + 1));
        }
    }

    pub fn results(&self) -> Option<Results> {
        debug_assert!(self.completed, "results called before the quiz completed");
        if !self.completed {
            return None;
        }

        let entries = self
            .order
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let (answer, duration) = match self.resolutions.get(&i) {
                    Some(r) => (r.answer.clone(), r.duration),
                    None => (AnswerRecord::Unanswered, Duration::ZERO),
                };
                ReviewEntry {
                    number: i + 1,
                    question: *question,
                    correct: answer.is_correct_for(question),
                    answer,
                    duration,
                }
            })
            .collect();

        Some(Results::new(entries, self.score, self.total_elapsed))
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        if self.completed {
            return Snapshot {
                current_question: None,
                current_index: self.current_index,
                total: self.order.len(),
                completed: true,
                score: self.score,
                remaining: Duration::ZERO,
                total_elapsed: self.total_elapsed,
                resolution: None,
                results: self.results(),
            };
        }

        let resolution = self.resolution(self.current_index).cloned();
        let remaining = self
            .remaining_at_resolution()
            .unwrap_or_else(|| self.remaining_for_current_question(now));

        Snapshot {
            current_question: self.order.get(self.current_index).copied(),
            current_index: self.current_index,
            total: self.order.len(),
            completed: false,
            score: self.score,
            remaining,
            total_elapsed: self.total_elapsed(now),
            resolution,
            results: None,
        }
    }

    fn can_resolve(&self, operation: &str) -> bool {
        let ok = !self.completed && !self.is_resolved();
        if !ok {
            logger::log(&format!(
                "{} ignored: question already resolved or quiz completed",
                operation
            ));
        }
        debug_assert!(
            ok,
            "{} called on a resolved question or a completed quiz",
            operation
        );
        ok
    }

    fn resolve(&mut self, answer: AnswerRecord, duration: Duration) {
        self.resolutions
            .insert(self.current_index, Resolution { answer, duration });
    }
}
