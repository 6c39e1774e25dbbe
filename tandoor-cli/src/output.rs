//! JSON output for command results.

use std::io::Write;

use serde::Serialize;

use crate::CliError;

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let rendered = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writeln!(writer, "{rendered}").map_err(CliError::WriteOutput)
}

/// Split a comma-separated option into trimmed, non-empty entries.
pub(crate) fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
