//! Terminal queries - detecting the width to lay columns out in

use crate::config::DEFAULT_TERMINAL_WIDTH;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Reasons the terminal width could not be determined
#[derive(Debug, Error)]
pub enum TermSizeError {
    #[error("terminal size query failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stty exited with {0}")]
    Status(ExitStatus),

    #[error("unexpected stty output: {0:?}")]
    Malformed(String),

    #[error("terminal reported zero width")]
    ZeroWidth,
}

/// Width of the controlling terminal, or the default when it cannot be read
pub fn terminal_width() -> usize {
    width_or_default(crossterm_width().or_else(|e| {
        log::debug!("crossterm size query failed ({}), trying stty", e);
        stty_width()
    }))
}

fn width_or_default(result: Result<usize, TermSizeError>) -> usize {
    match result {
        Ok(width) => {
            log::debug!("Terminal width: {}", width);
            width
        }
        Err(e) => {
            log::debug!(
                "Falling back to width {}: {}",
                DEFAULT_TERMINAL_WIDTH,
                e
            );
            DEFAULT_TERMINAL_WIDTH
        }
    }
}

fn crossterm_width() -> Result<usize, TermSizeError> {
    let (cols, _rows) = crossterm::terminal::size()?;
    nonzero(cols as usize)
}

/// Ask `stty size` about the terminal on our stdin
fn stty_width() -> Result<usize, TermSizeError> {
    let output = Command::new("stty")
        .arg("size")
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()?;

    if !output.status.success() {
        return Err(TermSizeError::Status(output.status));
    }

    parse_stty_size(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `stty size` output ("rows cols") and return the column count
pub fn parse_stty_size(output: &str) -> Result<usize, TermSizeError> {
    let malformed = || TermSizeError::Malformed(output.to_string());

    let parts: Vec<&str> = output.split_whitespace().collect();
    let [rows, cols] = parts.as_slice() else {
        return Err(malformed());
    };
    rows.parse::<usize>().map_err(|_| malformed())?;
    let cols = cols.parse::<usize>().map_err(|_| malformed())?;

    nonzero(cols)
}

fn nonzero(width: usize) -> Result<usize, TermSizeError> {
    if width == 0 {
        Err(TermSizeError::ZeroWidth)
    } else {
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stty_size() {
        assert_eq!(parse_stty_size("24 80\n").unwrap(), 80);
        assert_eq!(parse_stty_size("  50   211 ").unwrap(), 211);
    }

    #[test]
    fn test_parse_stty_size_malformed() {
        assert!(matches!(parse_stty_size(""), Err(TermSizeError::Malformed(_))));
        assert!(matches!(parse_stty_size("80"), Err(TermSizeError::Malformed(_))));
        assert!(matches!(parse_stty_size("24 80 1"), Err(TermSizeError::Malformed(_))));
        assert!(matches!(parse_stty_size("24 wide"), Err(TermSizeError::Malformed(_))));
        assert!(matches!(parse_stty_size("-1 80"), Err(TermSizeError::Malformed(_))));
        assert!(matches!(parse_stty_size("24 0"), Err(TermSizeError::ZeroWidth)));
    }

    #[test]
    fn test_failed_query_falls_back() {
        assert_eq!(width_or_default(nonzero(0)), DEFAULT_TERMINAL_WIDTH);
        assert_eq!(width_or_default(parse_stty_size("garbage")), DEFAULT_TERMINAL_WIDTH);
        assert_eq!(width_or_default(parse_stty_size("24 132")), 132);
    }
}
