//! Due date engine: the work calendar, the calendar-arithmetic primitives
//! and the calculator that composes them.

pub mod calculator;
pub mod calendar;
pub mod logic;

pub use calculator::due_date::calculate;
pub use calendar::WorkCalendar;
pub use logic::DueDateCalculator;
