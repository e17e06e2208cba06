pub mod args;
pub mod database;
pub mod model;
pub mod report;
pub mod utils;
