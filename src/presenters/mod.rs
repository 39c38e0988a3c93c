pub mod terminal_presenter;
