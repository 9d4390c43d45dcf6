//! Key-value process outputs for the CI caller.
use std::{env, fs::OpenOptions, io::Write};

use crate::error::Result;

/// Delimiter framing multiline output values.
const MULTILINE_DELIMITER: &str = "EOF";

/// Publish one output value. When the GITHUB_OUTPUT file variable is set the
/// entry is appended there; otherwise it is printed to stdout.
pub fn set_output(key: &str, value: &str) -> Result<()> {
    if let Ok(path) = env::var("GITHUB_OUTPUT") {
        let mut file =
            OpenOptions::new().create(true).append(true).open(path)?;
        write_entry(&mut file, key, value)?;
    } else {
        let mut stdout = std::io::stdout();
        write_entry(&mut stdout, key, value)?;
    }

    Ok(())
}

/// Write one entry in the key-value output format, using heredoc framing
/// for multiline values.
fn write_entry<W: Write>(writer: &mut W, key: &str, value: &str) -> Result<()> {
    if value.contains('\n') {
        writeln!(writer, "{key}<<{MULTILINE_DELIMITER}")?;
        writeln!(writer, "{value}")?;
        writeln!(writer, "{MULTILINE_DELIMITER}")?;
    } else {
        writeln!(writer, "{key}={value}")?;
    }

    Ok(())
}
