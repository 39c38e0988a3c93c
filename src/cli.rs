use clap::{Parser, Subcommand};

use std::path::PathBuf;

/// Rate the horror movies you have watched and find out what to watch next.
#[derive(Debug, Parser)]
#[command(name = "cinerate", version, about)]
pub struct Cli {
    /// Catalog JSON, as a local path or an http(s) URL
    #[arg(long, env = "CINERATE_CATALOG", default_value = "horror-movies.json")]
    pub catalog: String,

    /// Where your ratings and watched movies are stored
    #[arg(long, env = "CINERATE_STATE", default_value = "ratings.json")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List movies, optionally filtered
    List {
        /// Matches title, director or year
        #[arg(long, default_value = "")]
        search: String,

        /// Only movies with exactly this rating
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
    },
    /// Mark a movie as watched
    Watch { id: u32 },
    /// Mark a movie as not watched, restoring its original rating
    Unwatch { id: u32 },
    /// Rate a watched movie from 1 to 5
    Rate {
        id: u32,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Recommend unwatched movies based on your ratings
    Recommend,
    /// Show catalog statistics
    Stats,
    /// Forget every rating and watched movie
    Reset,
    /// Export watched movies as a Letterboxd-compatible CSV file
    Export {
        #[arg(long, default_value = "watched.csv")]
        output: PathBuf,
    },
}
