//! Output Formatting
//!
//! Writes successful lookups to the success stream in the configured format
//! and failed lookups to the diagnostic stream, one line per token.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style as TableStyle;

use errknow::{ErrorEntry, Lookup, LookupFailure, OutputConfig, OutputFormat};

const HEADER: [&str; 3] = ["CODE", "NAME", "DESCRIPTION"];
const CODE_WIDTH: usize = 4;
const NAME_WIDTH: usize = 16;

/// Counts of what a run printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub resolved: usize,
    pub failed: usize,
}

/// Owns both output streams and the header state for one run.
pub struct OutputSink<W: Write, E: Write> {
    config: OutputConfig,
    out: W,
    err: E,
    header_printed: bool,
    table_rows: Vec<ErrorEntry>,
    summary: RunSummary,
}

impl<W: Write, E: Write> OutputSink<W, E> {
    pub fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self {
            config,
            out,
            err,
            header_printed: false,
            table_rows: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Report one lookup outcome.
    pub fn emit(&mut self, lookup: &Lookup) -> io::Result<()> {
        match lookup {
            Ok(entry) => self.success(entry),
            Err(failure) => self.failure(failure),
        }
    }

    fn success(&mut self, entry: &ErrorEntry) -> io::Result<()> {
        self.summary.resolved += 1;

        match self.config.format {
            OutputFormat::Plain => {
                let name = self.paint_name(&entry.name);
                writeln!(self.out, "{} {} {}", entry.code, name, entry.description)
            }
            OutputFormat::Aligned => {
                self.ensure_header()?;
                let name = self.paint_name(&format!("{:<NAME_WIDTH$}", entry.name));
                writeln!(
                    self.out,
                    "{:>CODE_WIDTH$} {} {}",
                    entry.code, name, entry.description
                )
            }
            OutputFormat::Table => {
                self.table_rows.push(entry.clone());
                Ok(())
            }
            OutputFormat::Jsonl => {
                let line = serde_json::to_string(entry).map_err(io::Error::from)?;
                writeln!(self.out, "{line}")
            }
        }
    }

    fn failure(&mut self, failure: &LookupFailure) -> io::Result<()> {
        self.summary.failed += 1;
        writeln!(self.err, "{failure}")
    }

    /// Whether this run prints a column header at all.
    fn wants_header(&self) -> bool {
        self.config.header && self.config.format.has_header()
    }

    /// Print the aligned header, at most once per run.
    fn ensure_header(&mut self) -> io::Result<()> {
        if self.header_printed || !self.wants_header() {
            return Ok(());
        }
        self.header_printed = true;

        let header = format!(
            "{:>CODE_WIDTH$} {:<NAME_WIDTH$} {}",
            HEADER[0], HEADER[1], HEADER[2]
        );
        if self.config.color {
            writeln!(self.out, "{}", header.bold())
        } else {
            writeln!(self.out, "{header}")
        }
    }

    fn paint_name(&self, name: &str) -> String {
        if self.config.color {
            name.bright_cyan().to_string()
        } else {
            name.to_string()
        }
    }

    /// Flush anything buffered (the table format) and return the counts.
    pub fn finish(mut self) -> io::Result<RunSummary> {
        if !self.table_rows.is_empty() {
            let mut builder = Builder::default();
            if self.wants_header() {
                self.header_printed = true;
                if self.config.color {
                    builder.set_header(HEADER.iter().map(|h| h.bold().to_string()));
                } else {
                    builder.set_header(HEADER);
                }
            }
            for entry in &self.table_rows {
                builder.push_record([
                    entry.code.to_string(),
                    self.paint_name(&entry.name),
                    entry.description.clone(),
                ]);
            }

            let mut table = builder.build();
            table.with(TableStyle::rounded());
            writeln!(self.out, "{table}")?;
        }

        self.out.flush()?;
        self.err.flush()?;
        Ok(self.summary)
    }

    #[cfg(test)]
    fn header_printed(&self) -> bool {
        self.header_printed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: usize, name: &str, description: &str) -> ErrorEntry {
        ErrorEntry {
            code,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn config(format: OutputFormat) -> OutputConfig {
        OutputConfig {
            format,
            ..OutputConfig::default()
        }
    }

    fn run(config: OutputConfig, lookups: &[Lookup]) -> (String, String, RunSummary) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = {
            let mut sink = OutputSink::new(config, &mut out, &mut err);
            for lookup in lookups {
                sink.emit(lookup).expect("emit");
            }
            sink.finish().expect("finish")
        };
        (
            String::from_utf8(out).expect("utf8 stdout"),
            String::from_utf8(err).expect("utf8 stderr"),
            summary,
        )
    }

    #[test]
    fn plain_rows_go_to_stdout() {
        let lookups = [Ok(entry(2, "ENOENT", "No such file or directory"))];
        let (out, err, summary) = run(config(OutputFormat::Plain), &lookups);
        assert_eq!(out, "2 ENOENT No such file or directory\n");
        assert!(err.is_empty());
        assert_eq!(summary, RunSummary { resolved: 1, failed: 0 });
    }

    #[test]
    fn failures_go_to_stderr_only() {
        let lookups = [
            Err(LookupFailure::OutOfRange {
                token: "5000".to_string(),
            }),
            Err(LookupFailure::NotFound {
                token: "ENOENTZZZ".to_string(),
                suggestions: vec!["ENOENT".to_string()],
            }),
        ];
        let (out, err, summary) = run(config(OutputFormat::Aligned), &lookups);
        assert!(out.is_empty(), "no header without a success row");
        assert_eq!(
            err,
            "5000 is out of range.\nENOENTZZZ was not found. Did you mean ENOENT?\n"
        );
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn aligned_header_printed_once() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut sink = OutputSink::new(config(OutputFormat::Aligned), &mut out, &mut err);

        assert!(!sink.header_printed());
        sink.emit(&Ok(entry(1, "EPERM", "Operation not permitted")))
            .expect("emit");
        assert!(sink.header_printed());
        sink.emit(&Err(LookupFailure::not_found("EWHAT"))).expect("emit");
        sink.emit(&Ok(entry(2, "ENOENT", "No such file or directory")))
            .expect("emit");
        sink.finish().expect("finish");

        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| l.contains("DESCRIPTION")).count(), 1);
        assert_eq!(lines[0], "CODE NAME             DESCRIPTION");
        assert_eq!(lines[1], "   1 EPERM            Operation not permitted");
    }

    #[test]
    fn aligned_header_can_be_disabled() {
        let config = OutputConfig {
            format: OutputFormat::Aligned,
            header: false,
            color: false,
        };
        let (out, _, _) = run(config, &[Ok(entry(5, "EIO", "Input/output error"))]);
        assert_eq!(out, "   5 EIO              Input/output error\n");
    }

    #[test]
    fn jsonl_rows_are_json_objects() {
        let lookups = [
            Ok(entry(2, "ENOENT", "No such file or directory")),
            Ok(entry(13, "EACCES", "Permission denied")),
        ];
        let (out, _, _) = run(config(OutputFormat::Jsonl), &lookups);
        let rows: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("valid json"))
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["code"], 2);
        assert_eq!(rows[1]["name"], "EACCES");
        assert_eq!(rows[1]["description"], "Permission denied");
    }

    #[test]
    fn table_renders_on_finish() {
        let lookups = [
            Ok(entry(2, "ENOENT", "No such file or directory")),
            Err(LookupFailure::not_found("EWHAT")),
        ];
        let (out, err, summary) = run(config(OutputFormat::Table), &lookups);
        assert!(out.contains("NAME"));
        assert!(out.contains("ENOENT"));
        assert!(out.contains("No such file or directory"));
        assert_eq!(err, "EWHAT was not found.\n");
        assert_eq!(summary, RunSummary { resolved: 1, failed: 1 });
    }

    #[test]
    fn table_header_can_be_disabled() {
        let config = OutputConfig {
            format: OutputFormat::Table,
            header: false,
            color: false,
        };
        let (out, _, _) = run(config, &[Ok(entry(2, "ENOENT", "No such file or directory"))]);
        assert!(out.contains("ENOENT"));
        assert!(!out.contains("DESCRIPTION"));
    }

    #[test]
    fn headerless_formats_never_mark_header_printed() {
        for format in [OutputFormat::Plain, OutputFormat::Jsonl] {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let mut sink = OutputSink::new(config(format), &mut out, &mut err);
            sink.emit(&Ok(entry(1, "EPERM", "Operation not permitted")))
                .expect("emit");
            assert!(!sink.header_printed());
            sink.finish().expect("finish");
            assert!(!String::from_utf8(out).expect("utf8").contains("DESCRIPTION"));
        }
    }

    #[test]
    fn table_with_no_rows_prints_nothing() {
        let (out, _, _) = run(config(OutputFormat::Table), &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn color_wraps_names_in_ansi() {
        let config = OutputConfig {
            color: true,
            ..OutputConfig::default()
        };
        let (out, _, _) = run(config, &[Ok(entry(2, "ENOENT", "No such file or directory"))]);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("ENOENT"));
    }
}
