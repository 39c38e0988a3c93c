pub mod csv_writer;
pub mod user_state_file;
