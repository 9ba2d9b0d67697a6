use crate::classify::{self, Value};
use crate::config::Config;
use crate::error::{AppError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered three-way partition of every classified line.
///
/// Insertion order matches input order across all processed files; no
/// deduplication is performed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub integers: Vec<i64>,
    pub floats: Vec<f64>,
    pub strings: Vec<String>,
}

impl Partition {
    pub fn push(&mut self, value: Value) {
        match value {
            Value::Integer(i) => self.integers.push(i),
            Value::Float(f) => self.floats.push(f),
            Value::Str(s) => self.strings.push(s),
        }
    }

    /// Total number of classified lines across all three categories.
    pub fn len(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read every input file in argument order and classify its lines.
///
/// Each file is fully consumed before the next begins. Lines are trimmed
/// of surrounding whitespace; lines empty after trimming are dropped.
///
/// # Errors
///
/// Returns `FileRead` for the first file that cannot be opened or read,
/// aborting the whole run.
pub fn run(config: &Config) -> Result<Partition> {
    let mut partition = Partition::default();
    for path in &config.inputs {
        process_file(path, &mut partition)?;
    }
    Ok(partition)
}

fn process_file(path: &Path, partition: &mut Partition) -> Result<()> {
    let file = File::open(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        partition.push(classify::classify(trimmed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(paths: &[&Path]) -> Config {
        Config {
            inputs: paths.iter().map(|p| p.to_path_buf()).collect(),
            output_dir: ".".into(),
            prefix: String::new(),
            append: false,
            stats: crate::config::StatsMode::None,
        }
    }

    #[test]
    fn partitions_mixed_content_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "42\n3.0\nabc\n-7\n4.2e1\nhello world\n").unwrap();

        let config = config_for(&[file.path()]);
        let partition = run(&config).unwrap();

        assert_eq!(partition.integers, vec![42, -7]);
        assert_eq!(partition.floats, vec![3.0, 42.0]);
        assert_eq!(
            partition.strings,
            vec!["abc".to_string(), "hello world".to_string()]
        );
        assert_eq!(partition.len(), 6);
    }

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n   \n\t\n1\n  2  \n\n").unwrap();

        let config = config_for(&[file.path()]);
        let partition = run(&config).unwrap();

        assert_eq!(partition.integers, vec![1, 2]);
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn files_are_consumed_in_argument_order() {
        let mut first = NamedTempFile::new().unwrap();
        write!(first, "one\n1\n").unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(second, "two\n2\n").unwrap();

        let config = config_for(&[first.path(), second.path()]);
        let partition = run(&config).unwrap();

        assert_eq!(partition.strings, vec!["one".to_string(), "two".to_string()]);
        assert_eq!(partition.integers, vec![1, 2]);
    }

    #[test]
    fn missing_file_aborts_with_file_read_error() {
        let config = config_for(&[Path::new("definitely/not/here.txt")]);
        let err = run(&config).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
    }
}
