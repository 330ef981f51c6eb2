//! Where a request can come from: inline argument, file, or stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Resolve the request JSON text. Inline text wins over `--file`; with
/// neither, stdin is read to the end.
pub fn read_request_text(inline: Option<&str>, file: Option<&Path>) -> Result<String, String> {
    if let Some(text) = inline {
        return Ok(text.to_owned());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .map_err(|err| format!("could not read {}: {err}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("could not read stdin: {err}"))?;

    if text.trim().is_empty() {
        return Err("no request given: pass JSON inline, via --file, or on stdin".to_owned());
    }
    Ok(text)
}
