use std::fmt;

use crate::problem::types::{Operation, Problem};

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut numbers = self.numbers.iter();
        match numbers.next() {
            Some(first) => write!(f, "{}", first)?,
            None => return Ok(()),
        }
        for number in numbers {
            write!(f, " {} {}", self.operation.symbol(), number)?;
        }
        Ok(())
    }
}
