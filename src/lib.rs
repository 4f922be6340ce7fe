//! Abacus drill - mental-arithmetic problem generation
//!
//! This library produces arithmetic drill problems for abacus (soroban)
//! practice: configurable operand counts and value ranges, a choice of the
//! four basic operations, division that is always integer-exact, and the
//! optional "five"/"ten" digit-pairing rules used to drill carry and borrow
//! technique.

pub mod generator;
pub mod problem;
pub mod settings;

// Re-export the main public API
pub use generator::{GeneratorError, ProblemGenerator};
pub use problem::{Operation, Problem};
pub use settings::{GeneratorSettings, LawsMode, SettingsError};

/// Generate a batch of drill problems with a fresh entropy-seeded generator
///
/// This is a convenience function for callers that want a fixed-length
/// problem sheet and no control over the random source. Use
/// [`ProblemGenerator::seeded`] or [`ProblemGenerator::with_rng`] for
/// reproducible sequences.
///
/// # Errors
///
/// Returns an error if the settings fail validation:
/// * The operation list is empty
/// * Fewer than two operands are requested
/// * The range bounds are non-positive or inverted
///
/// # Examples
///
/// ```
/// use abacus_drill::{GeneratorSettings, Operation, generate_problems};
///
/// let settings = GeneratorSettings::new(2, 10, vec![Operation::Add]);
/// match generate_problems(settings, 5) {
///     Ok(problems) => assert_eq!(problems.len(), 5),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_problems(
    settings: GeneratorSettings,
    count: usize,
) -> Result<Vec<Problem>, GeneratorError> {
    let mut generator = ProblemGenerator::new(settings)?;
    Ok(generator.problems(count))
}
