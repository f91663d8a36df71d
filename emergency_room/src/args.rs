use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File with one `name, symptom, code` record per line.
    #[arg(short, long, default_value = "patients.txt")]
    pub patients_file: PathBuf,

    /// How the loaded patients are put into the queue.
    #[arg(short, long, value_enum, default_value_t = LoadMode::Heapify)]
    pub load_mode: LoadMode,

    /// Print attended patients as JSON, one object per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    /// Build the queue from all patients at once.
    Heapify,
    /// Register patients one at a time.
    Insert,
}
