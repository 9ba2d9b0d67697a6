use crate::config::Config;
use crate::engine::Partition;
use crate::error::{AppError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const INTEGERS_FILE: &str = "integers.txt";
pub const FLOATS_FILE: &str = "floats.txt";
pub const STRINGS_FILE: &str = "strings.txt";

/// Canonical text form of a float.
///
/// `Display` prints `42.0` as `42`, which the classifier would read back
/// as an integer; the `Debug` form is the shortest representation that
/// round-trips and always keeps a decimal point or exponent.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Write each non-empty category to `<output_dir>/<prefix><category>.txt`,
/// one element per line in collection order. Empty categories create no
/// file and do not touch an existing one.
pub fn write_partition(partition: &Partition, config: &Config) -> Result<()> {
    write_category(config, INTEGERS_FILE, &partition.integers, |v| {
        v.to_string()
    })?;
    write_category(config, FLOATS_FILE, &partition.floats, |v| format_float(*v))?;
    write_category(config, STRINGS_FILE, &partition.strings, Clone::clone)?;
    Ok(())
}

fn write_category<T>(
    config: &Config,
    name: &str,
    values: &[T],
    render: impl Fn(&T) -> String,
) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }

    let path = config.output_dir.join(format!("{}{name}", config.prefix));
    let file = open_for_write(&path, config.append).map_err(|e| AppError::FileWrite {
        path: path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for value in values {
        writeln!(writer, "{}", render(value)).map_err(|e| AppError::FileWrite {
            path: path.clone(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| AppError::FileWrite { path, source: e })
}

fn open_for_write(path: &Path, append: bool) -> std::io::Result<File> {
    if append {
        OpenOptions::new().append(true).create(true).open(path)
    } else {
        File::create(path)
    }
}
