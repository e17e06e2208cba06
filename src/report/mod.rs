pub mod playlist;
pub mod summary;
pub mod text_report;
