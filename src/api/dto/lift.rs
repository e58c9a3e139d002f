//! DTOs for lift endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Lift, NewLift};

/// Largest weight the store can hold (`NUMERIC(7, 2)`).
const MAX_WEIGHT: Decimal = Decimal::from_parts(9_999_999, 0, 0, false, 2);

/// Request to log a lift.
///
/// `weight` accepts a JSON number or a decimal string.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLiftRequest {
    pub exercise_id: i64,

    /// ISO `YYYY-MM-DD`.
    pub date: NaiveDate,

    #[validate(range(min = 0, message = "Repetitions must not be negative."))]
    pub repetitions: i32,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,
}

fn validate_weight(weight: &Decimal) -> Result<(), ValidationError> {
    let message = if weight.is_sign_negative() && !weight.is_zero() {
        "Weight must not be negative."
    } else if weight.normalize().scale() > 2 {
        "Weight must have at most 2 decimal places."
    } else if *weight > MAX_WEIGHT {
        "Weight must be at most 99999.99."
    } else {
        return Ok(());
    };

    Err(ValidationError::new("weight").with_message(Cow::Borrowed(message)))
}

impl CreateLiftRequest {
    /// Builds the insert for `user_id`, with the weight at two decimal places.
    pub fn into_new_lift(self, user_id: i64) -> NewLift {
        let mut weight = self.weight.normalize();
        weight.rescale(2);

        NewLift {
            user_id,
            exercise_id: self.exercise_id,
            date: self.date,
            repetitions: self.repetitions,
            weight,
        }
    }
}

/// Lift as listed. `exercise` is the exercise id; `weight` is a decimal string.
#[derive(Debug, Serialize)]
pub struct LiftResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub exercise: i64,
    pub repetitions: i32,
    pub weight: Decimal,
}

impl From<Lift> for LiftResponse {
    fn from(lift: Lift) -> Self {
        Self {
            id: lift.id,
            date: lift.date,
            exercise: lift.exercise_id,
            repetitions: lift.repetitions,
            weight: lift.weight,
        }
    }
}
