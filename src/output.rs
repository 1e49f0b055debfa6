//! Where the rendered manifest goes.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Value of `--output` that selects standard output.
pub const STDOUT_SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Acquire the destination, write `contents` and flush.
    ///
    /// A file is created (or truncated) only here, so nothing is written
    /// unless the manifest was fully rendered.
    pub fn write_all(&self, contents: &str) -> io::Result<()> {
        match self {
            Output::Stdout => write_to(io::stdout().lock(), contents),
            Output::File(path) => write_to(File::create(path)?, contents),
        }
    }
}

fn write_to<W: Write>(mut writer: W, contents: &str) -> io::Result<()> {
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}

impl FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STDOUT_SENTINEL {
            Ok(Output::Stdout)
        } else {
            Ok(Output::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}
