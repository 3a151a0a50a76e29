pub mod clock;
pub mod config;
pub mod form;
pub mod listing;
pub mod overview;
pub mod samples;
pub mod shell;
