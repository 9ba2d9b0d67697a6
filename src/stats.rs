use crate::config::StatsMode;
use crate::engine::Partition;
use crate::output::format_float;
use std::fmt::Write;

/// Render the statistics report for `mode`.
///
/// Returns an empty string for `StatsMode::None`; the binary prints the
/// result to stdout as-is.
pub fn render(partition: &Partition, mode: StatsMode) -> String {
    match mode {
        StatsMode::None => String::new(),
        StatsMode::Short => render_short(partition),
        StatsMode::Full => render_full(partition),
    }
}

/// Counts only. Always three lines, even when everything is zero.
fn render_short(partition: &Partition) -> String {
    format!(
        "Short Statistics:\nIntegers: {}\nFloats: {}\nStrings: {}\n",
        partition.integers.len(),
        partition.floats.len(),
        partition.strings.len()
    )
}

/// Per-category detail. Empty categories are skipped entirely.
fn render_full(partition: &Partition) -> String {
    let mut out = String::from("Full Statistics:\n");
    push_integer_stats(&mut out, &partition.integers);
    push_float_stats(&mut out, &partition.floats);
    push_string_stats(&mut out, &partition.strings);
    out
}

fn push_integer_stats(out: &mut String, values: &[i64]) {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return;
    };
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    let average = sum / values.len() as f64;

    let _ = writeln!(out, "Integers:");
    let _ = writeln!(out, "  Count: {}", values.len());
    let _ = writeln!(out, "  Min: {min}");
    let _ = writeln!(out, "  Max: {max}");
    let _ = writeln!(out, "  Sum: {}", format_float(sum));
    let _ = writeln!(out, "  Average: {}", format_float(average));
}

fn push_float_stats(out: &mut String, values: &[f64]) {
    let Some(&first) = values.first() else {
        return;
    };
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let sum: f64 = values.iter().sum();
    let average = sum / values.len() as f64;

    let _ = writeln!(out, "Floats:");
    let _ = writeln!(out, "  Count: {}", values.len());
    let _ = writeln!(out, "  Min: {}", format_float(min));
    let _ = writeln!(out, "  Max: {}", format_float(max));
    let _ = writeln!(out, "  Sum: {}", format_float(sum));
    let _ = writeln!(out, "  Average: {}", format_float(average));
}

fn push_string_stats(out: &mut String, values: &[String]) {
    if values.is_empty() {
        return;
    }
    // Lengths are character counts, not bytes
    let lengths = values.iter().map(|s| s.chars().count());
    let shortest = lengths.clone().min().unwrap_or(0);
    let longest = lengths.max().unwrap_or(0);

    let _ = writeln!(out, "Strings:");
    let _ = writeln!(out, "  Count: {}", values.len());
    let _ = writeln!(out, "  Shortest length: {shortest}");
    let _ = writeln!(out, "  Longest length: {longest}");
}
