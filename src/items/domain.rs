use crate::core::domain::Identifiable;

pub mod model;

// Item exposes the loan policy the engine reads; the catalog owns the
// records and the engine never mutates them.
pub(crate) trait Item: Identifiable {
    fn total_copies(&self) -> i64;
    fn loan_period_days(&self) -> i64;
    fn max_renewals(&self) -> i64;
}
