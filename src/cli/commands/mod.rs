pub mod batch;
pub mod calc;
pub mod check;
pub mod config;
pub mod init;
