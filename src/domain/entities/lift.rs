//! Domain entity representing a logged lift.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single performance of an exercise, owned by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lift {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: i64,
    pub date: NaiveDate,
    pub repetitions: i32,
    pub weight: Decimal,
}

/// Input data for logging a lift.
///
/// The referenced exercise must exist; services check this before insert.
#[derive(Debug, Clone)]
pub struct NewLift {
    pub user_id: i64,
    pub exercise_id: i64,
    pub date: NaiveDate,
    pub repetitions: i32,
    pub weight: Decimal,
}
