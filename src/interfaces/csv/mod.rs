pub mod history_reader;
pub mod verdict_writer;
