//! File and stdin helpers shared by the commands.
//!
//! - Reading interactive input lines
//! - Loading card catalogs from JSON
//! - Loading and saving the rankings file
//! - Ensuring parent directories exist before writes
//!
//! Fallible helpers return `Result<_, String>` so commands can wrap the
//! message in whichever [`CliError`](crate::CliError) fits.

use std::io::BufRead;
use std::path::Path;

use cloudpoker_engine::catalog::Catalog;
use cloudpoker_engine::ranking::{RankingEntry, Rankings};

/// Reads one line, trimmed. `None` on EOF or read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use cloudpoker_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  d 1 3\n");
/// assert_eq!(read_stdin_line(&mut input), Some("d 1 3".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &Path) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// The built-in deck when `path` is `None`, otherwise a JSON catalog file.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog, String> {
    match path {
        None => Ok(Catalog::standard()),
        Some(p) => {
            let text = read_text(Path::new(p))?;
            Catalog::from_json(&text).map_err(|e| format!("{}: {}", p, e))
        }
    }
}

/// Loads rankings; a missing or unreadable file counts as empty.
pub fn load_rankings(path: &Path) -> Rankings {
    if !path.exists() {
        return Rankings::new();
    }
    let parsed = read_text(path).and_then(|text| {
        serde_json::from_str::<Vec<RankingEntry>>(&text).map_err(|e| e.to_string())
    });
    match parsed {
        Ok(entries) => Rankings::from_entries(entries),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable rankings file");
            Rankings::new()
        }
    }
}

/// Writes rankings as a pretty-printed JSON array.
pub fn save_rankings(path: &Path, rankings: &Rankings) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(rankings).map_err(|e| e.to_string())?;
    std::fs::write(path, json + "\n")
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
