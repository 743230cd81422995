use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Copy a project's source files into a dated, .txt-renamed snapshot"
)]
pub struct Cli {
    /// Folder to copy from (defaults to the current directory)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Where the dated output folder is created (defaults to the source folder)
    #[arg(long)]
    pub output_parent: Option<PathBuf>,

    /// Use a named preset from presets.toml instead of the one matching the folder name
    #[arg(long)]
    pub preset: Option<String>,

    /// Extra extensions to copy (e.g., 'py' or '.go')
    #[arg(long = "extension", num_args = 1..)]
    pub extensions: Vec<String>,

    /// Extra exact file names to copy, case-insensitive (e.g., 'Makefile')
    #[arg(long = "file", num_args = 1..)]
    pub files: Vec<String>,

    /// Extra folder names never descended into
    #[arg(long = "ignore", num_args = 1..)]
    pub ignore_folders: Vec<String>,
}
