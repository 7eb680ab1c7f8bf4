// crates/cli/src/presentation.rs
use crate::error::Result;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use letter_counts_engine::collector::RunResult;
use letter_counts_engine::counts::CountVector;
use letter_counts_engine::options::OutputFormat;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Report<'a> {
    counts: &'a CountVector,
    total: u64,
    processed: usize,
    failed: Vec<FailedInput>,
}

#[derive(Serialize)]
struct FailedInput {
    path: String,
    error: String,
}

impl<'a> From<&'a RunResult> for Report<'a> {
    fn from(result: &'a RunResult) -> Self {
        Self {
            counts: &result.totals,
            total: result.totals.total(),
            processed: result.processed,
            failed: result
                .errors
                .iter()
                .map(|(path, err)| FailedInput {
                    path: path.display().to_string(),
                    error: err.to_string(),
                })
                .collect(),
        }
    }
}

/// Render the final report to `out`.
///
/// # Errors
/// Write or serialization failures.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, &result.totals)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &Report::from(result))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &Report::from(result))?,
        OutputFormat::Csv => write_csv(out, &result.totals)?,
        OutputFormat::Table => write_table(out, &result.totals)?,
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, totals: &CountVector) -> std::io::Result<()> {
    for (letter, count) in totals.iter() {
        writeln!(out, "{letter} Count: {count}")?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, totals: &CountVector) -> std::io::Result<()> {
    writeln!(out, "letter,count")?;
    for (letter, count) in totals.iter() {
        writeln!(out, "{letter},{count}")?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, totals: &CountVector) -> std::io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["LETTER", "COUNT"]);

    for (letter, count) in totals.iter() {
        table.add_row(vec![
            Cell::new(letter),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL"),
        Cell::new(totals.total()).set_alignment(CellAlignment::Right),
    ]);

    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use letter_counts_engine::error::WorkerError;
    use std::path::PathBuf;

    fn sample() -> RunResult {
        let mut totals = CountVector::zero();
        for &b in b"aab" {
            totals.record(b);
        }
        RunResult {
            totals,
            processed: 1,
            errors: vec![(
                PathBuf::from("missing.txt"),
                WorkerError::Open {
                    path: PathBuf::from("missing.txt"),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                },
            )],
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_has_one_line_per_letter() {
        let text = render(OutputFormat::Text);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "a Count: 2");
        assert_eq!(lines[1], "b Count: 1");
        assert_eq!(lines[25], "z Count: 0");
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(json["counts"]["a"], 2);
        assert_eq!(json["counts"]["z"], 0);
        assert_eq!(json["total"], 3);
        assert_eq!(json["processed"], 1);
        assert_eq!(json["failed"][0]["path"], "missing.txt");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = render(OutputFormat::Csv);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("letter,count"));
        assert_eq!(lines.next(), Some("a,2"));
        assert_eq!(csv.lines().count(), 27);
    }

    #[test]
    fn test_yaml_report() {
        let yaml = render(OutputFormat::Yaml);
        assert!(yaml.contains("total: 3"));
        assert!(yaml.contains("missing.txt"));
    }

    #[test]
    fn test_table_has_total_row() {
        let table = render(OutputFormat::Table);
        assert!(table.contains("LETTER"));
        assert!(table.contains("TOTAL"));
    }
}
