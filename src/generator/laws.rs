use rand::Rng;

use crate::generator::constants::LAWS_DIGIT_MAX;
use crate::settings::LawsMode;

/// Last-digit sum target for a laws mode, or `None` when no pairing applies.
///
/// `Both` has only ever paired on the five rule; preserved as-is until the
/// curriculum says otherwise.
pub fn pair_target(laws_mode: LawsMode) -> Option<i64> {
    match laws_mode {
        LawsMode::None => None,
        LawsMode::Five | LawsMode::Both => Some(5),
        LawsMode::Ten => Some(10),
    }
}

/// Draw the correlated digit pair for an addition or subtraction drill.
///
/// The first digit is uniform in `[1, min(9, number_range)]`; the second is
/// the complement that brings the last-digit sum to a multiple of `target`,
/// clamped back into the same digit range.
pub fn digit_pair<R: Rng>(rng: &mut R, target: i64, number_range: i64) -> (i64, i64) {
    let digit_max = LAWS_DIGIT_MAX.min(number_range);
    let first = rng.gen_range(1..=digit_max);
    let second = complement(first, target).clamp(1, digit_max);
    (first, second)
}

fn complement(digit: i64, target: i64) -> i64 {
    let needed = (target - digit % 10).rem_euclid(10);
    if needed == 0 { target } else { needed }
}
