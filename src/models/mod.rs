pub mod due_record;
pub mod due_request;
