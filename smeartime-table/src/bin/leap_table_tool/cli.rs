//! CLI argument definitions for leap_table_tool

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leap_table_tool")]
#[command(about = "Transcodes leap-second catalogs between wire formats")]
#[command(version)]
pub struct Cli {
    /// Catalog file to read
    pub filename: PathBuf,

    /// Format of the input file
    #[arg(long, value_enum, default_value_t = InputFormat::Textproto)]
    pub input: InputFormat,

    /// Format written to standard output
    #[arg(long, value_enum, default_value_t = OutputFormat::Proto)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum InputFormat {
    Proto,
    Textproto,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Proto,
    Textproto,
    Json,
    /// Construct the full leap table and print its debug dump
    Debug,
}
