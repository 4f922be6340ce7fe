// Configuration constants for the generator module
pub const LAWS_RANGE_LIMIT: i64 = 100;
pub const LAWS_DIGIT_MAX: i64 = 9;
pub const DIVISION_OPERAND_CAP: i64 = 100;
