use log::debug;

/// Arithmetic operations a drill problem can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Fold the operation over `numbers` from left to right.
    ///
    /// Returns `None` for an empty operand list or a division step with a
    /// zero divisor.
    pub fn evaluate(&self, numbers: &[i64]) -> Option<i64> {
        let (&first, rest) = numbers.split_first()?;
        rest.iter().try_fold(first, |acc, &n| match self {
            Operation::Add => Some(acc + n),
            Operation::Subtract => Some(acc - n),
            Operation::Multiply => Some(acc * n),
            Operation::Divide => {
                if n == 0 {
                    debug!("Division by zero in operand fold");
                    None
                } else {
                    Some(acc / n)
                }
            }
        })
    }
}

/// One generated drill problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub numbers: Vec<i64>,
    pub operation: Operation,
    pub correct_answer: i64,
}

impl Problem {
    /// Compare a user answer against the stored correct answer
    pub fn check(&self, answer: i64) -> bool {
        debug!(
            "Checking answer {} against expected {}",
            answer, self.correct_answer
        );
        answer == self.correct_answer
    }
}
