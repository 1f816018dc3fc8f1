//! CLI module - terminal interface for the hub's lookups.
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Utilihub - everyday lookups in one place
/// Weather, demographics, places and recipes from public APIs
#[derive(Parser)]
#[command(name = "utilihub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web hub (JSON API + embedded frontend)
    #[command(alias = "daemon", alias = "-d")]
    Serve,

    /// Current temperature for a city
    #[command(alias = "w", alias = "temp")]
    Weather {
        /// City name, e.g. "London"
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Male and female population for a country
    #[command(alias = "p", alias = "pop")]
    Population {
        /// Country name or two-letter code, e.g. "INDIA" or "IN"
        #[arg(required = true)]
        country: Vec<String>,
    },

    /// Schools, colleges and universities in a city
    #[command(alias = "e", alias = "edu")]
    Education {
        /// City name
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Named rivers and lakes in a city
    Water {
        /// City name
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Recipes for a dish, with ingredients and instructions
    #[command(alias = "r")]
    Recipe {
        /// Food name, e.g. "Pasta"
        #[arg(required = true)]
        food: Vec<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
