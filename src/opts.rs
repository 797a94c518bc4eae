use gumdrop::Options;
use std::path::PathBuf;

/// Compiles RCD data definitions into game data files.
#[derive(Options)]
pub struct Opts {
    /// Display this help message
    pub help: bool,

    /// The source file to compile (standard input when omitted)
    #[options(free)]
    pub files: Vec<PathBuf>,
}
