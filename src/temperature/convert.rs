use crate::config::TemperatureConfig;
use crate::error::{ToolError, ToolResult};
use crate::temperature::disk::SpaceProbe;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts one reading to Fahrenheit.
///
/// `<number>C` is converted and rendered with `precision` decimals, a line
/// ending in `F` is passed through untouched.
pub fn convert_line(line: &str, precision: usize) -> ToolResult<String> {
    let line = line.trim();
    if let Some(value) = line.strip_suffix('C') {
        let celsius: f64 = value.trim().parse().map_err(|_| ToolError::UnexpectedFormat {
            line: line.to_string(),
            expected: "'C'",
        })?;
        Ok(format!("{:.*}F", precision, celsius_to_fahrenheit(celsius)))
    } else if line.ends_with('F') {
        Ok(line.to_string())
    } else {
        Err(ToolError::UnexpectedFormat {
            line: line.to_string(),
            expected: "'C' or 'F'",
        })
    }
}

/// Output path next to `input`: `<stem><suffix>.<ext>`.
pub fn processed_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

/// Converts every reading in a `.txt` file and writes the result beside it.
///
/// Nothing is written unless every line converts and the probe reports
/// enough room. Returns the path of the written file.
pub fn process_temperature_file(
    path: &Path,
    probe: &impl SpaceProbe,
    config: &TemperatureConfig,
) -> ToolResult<PathBuf> {
    let has_txt_extension = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(".txt"))
        .unwrap_or(false);
    if !has_txt_extension {
        return Err(ToolError::UnsupportedExtension(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|err| file_error(err, path))?;
    let processed = contents
        .lines()
        .map(|line| convert_line(line, config.precision))
        .collect::<ToolResult<Vec<_>>>()?;
    let output = processed.join("\n");
    tracing::debug!(path = %path.display(), readings = processed.len(), "converted readings");

    let output_path = processed_path(path, &config.output_suffix);
    let directory = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let needed = output.len() as u64;
    match probe.available_space(&directory) {
        Some(available) if needed > available => {
            return Err(ToolError::InsufficientSpace { needed, available });
        }
        Some(_) => {}
        None => {
            tracing::warn!(dir = %directory.display(), "free space unknown, skipping disk check");
        }
    }

    fs::write(&output_path, output).map_err(|err| file_error(err, &output_path))?;
    tracing::info!(output = %output_path.display(), "wrote processed readings");
    Ok(output_path)
}

fn file_error(err: io::Error, path: &Path) -> ToolError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => ToolError::PermissionDenied(path.to_path_buf()),
        _ => ToolError::Io(err),
    }
}
