pub mod print;
pub mod setup;
pub mod update;
