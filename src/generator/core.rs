use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::generator::constants::{DIVISION_OPERAND_CAP, LAWS_RANGE_LIMIT};
use crate::generator::errors::GeneratorError;
use crate::generator::laws;
use crate::problem::{Operation, Problem};
use crate::settings::{GeneratorSettings, validate_settings};

/// Produces drill problems from a fixed, validated configuration.
///
/// The settings are captured once at construction and never mutated; every
/// call to [`next_problem`](Self::next_problem) is an independent draw
/// against the injected random source.
pub struct ProblemGenerator<R> {
    settings: GeneratorSettings,
    rng: R,
}

impl ProblemGenerator<StdRng> {
    /// Create a generator backed by an entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn new(settings: GeneratorSettings) -> Result<Self, GeneratorError> {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed, yielding a reproducible
    /// problem sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn seeded(settings: GeneratorSettings, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProblemGenerator<R> {
    /// Create a generator over a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn with_rng(settings: GeneratorSettings, rng: R) -> Result<Self, GeneratorError> {
        validate_settings(&settings)?;
        info!(
            "Generator configured: {} operands in [{}, {}], {} operations, laws {:?}",
            settings.numbers_count,
            settings.number_range_min,
            settings.number_range,
            settings.operations.len(),
            settings.laws_mode
        );
        Ok(Self { settings, rng })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Produce one problem.
    pub fn next_problem(&mut self) -> Problem {
        let numbers = self.draw_operands();
        let operation = self.pick_operation();

        let problem = if operation == Operation::Divide {
            self.division_problem()
        } else {
            // at least two operands are guaranteed, so the fold cannot miss
            let correct_answer = operation.evaluate(&numbers).unwrap_or(0);
            Problem {
                numbers,
                operation,
                correct_answer,
            }
        };

        debug!("Generated: {} = {}", problem, problem.correct_answer);
        problem
    }

    /// Produce a fixed-length batch of problems.
    pub fn problems(&mut self, count: usize) -> Vec<Problem> {
        (0..count).map(|_| self.next_problem()).collect()
    }

    fn draw_operands(&mut self) -> Vec<i64> {
        let count = self.settings.numbers_count;
        let min = self.settings.number_range_min;
        let max = self.settings.number_range;

        let mut numbers = Vec::with_capacity(count);
        if let Some(target) = self.pair_target() {
            let (first, second) = laws::digit_pair(&mut self.rng, target, max);
            numbers.push(first);
            numbers.push(second);
        }
        while numbers.len() < count {
            numbers.push(self.rng.gen_range(min..=max));
        }
        numbers
    }

    /// Laws pairing applies only to small-range drills whose operation list
    /// can actually produce an addition or subtraction.
    fn pair_target(&self) -> Option<i64> {
        if self.settings.number_range > LAWS_RANGE_LIMIT || self.settings.numbers_count < 2 {
            return None;
        }
        let drills_carries = self
            .settings
            .operations
            .iter()
            .any(|op| matches!(op, Operation::Add | Operation::Subtract));
        if !drills_carries {
            return None;
        }
        laws::pair_target(self.settings.laws_mode)
    }

    fn pick_operation(&mut self) -> Operation {
        self.settings
            .operations
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Operation::Add)
    }

    fn division_problem(&mut self) -> Problem {
        let cap = self.settings.number_range.min(DIVISION_OPERAND_CAP);
        let quotient = self.rng.gen_range(1..=cap);
        let divisor = self.rng.gen_range(1..=cap);
        // dividend = quotient * divisor may exceed number_range; exact
        // division takes precedence over the range cap here
        Problem {
            numbers: vec![quotient * divisor, divisor],
            operation: Operation::Divide,
            correct_answer: quotient,
        }
    }
}
