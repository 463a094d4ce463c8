pub mod days;
pub mod due_date;
pub mod hours;
pub mod workday;
