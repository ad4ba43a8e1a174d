use std::fmt;

use crate::args::{Count, Request};
use crate::file_source::FileSource;
use crate::window;

/// Which utility is running. Each binary passes its own operation in;
/// nothing is ever inferred from the program path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Head,
    Tail,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Head => "head",
            Operation::Tail => "tail",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Operation::Head => "head [-n lines | -c bytes] [file ...]",
            Operation::Tail => "tail [-F | -f | -r] [-q] [-b # | -c # | -n #] [file ...]",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Lines,
    Bytes,
}

impl Mode {
    fn from_option(letter: char) -> Option<Mode> {
        match letter {
            'n' => Some(Mode::Lines),
            'c' => Some(Mode::Bytes),
            _ => None,
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Mode::Lines => "line",
            Mode::Bytes => "byte",
        }
    }
}

/// Per-file result while assembling output. Failures carry their final
/// text and are never wrapped in a banner.
enum FileOutcome {
    Content { file: String, text: String },
    Failed(String),
}

/// Run the full pipeline: validate, then fetch, window and format each
/// requested file. Every input combination maps to exactly one output
/// string; nothing here panics or escalates.
pub fn run(op: Operation, request: &Request, source: &dyn FileSource) -> String {
    let mode = match Mode::from_option(request.option) {
        Some(mode) => mode,
        None => {
            return format!(
                "{}: illegal option -- {}\nusage: {}",
                op,
                request.option,
                op.usage()
            )
        }
    };

    let count = match resolve_count(op, mode, &request.count) {
        Ok(count) => count,
        Err(output) => return output,
    };

    let outcomes: Vec<FileOutcome> = request
        .files
        .iter()
        .map(|file| fetch(op, mode, count, file, source))
        .collect();

    format_outcomes(outcomes)
}

/// Count legality depends on the operation: head rejects anything below
/// one, while tail treats zero as a no-op (a single space, matching the
/// reference tool) and rejects only negative or non-integer offsets.
/// The Err side already holds the final output string.
fn resolve_count(op: Operation, mode: Mode, count: &Count) -> Result<usize, String> {
    match (op, count) {
        (Operation::Head, Count::Value(n)) if *n > 0 => Ok(*n as usize),
        (Operation::Head, _) => Err(format!(
            "head: illegal {} count -- {}",
            mode.unit(),
            count
        )),
        (Operation::Tail, Count::Value(0)) => Err(" ".to_string()),
        (Operation::Tail, Count::Value(n)) if *n > 0 => Ok(*n as usize),
        (Operation::Tail, _) => Err(format!("tail: illegal offset -- {}", count)),
    }
}

fn fetch(
    op: Operation,
    mode: Mode,
    count: usize,
    file: &str,
    source: &dyn FileSource,
) -> FileOutcome {
    if !source.exists(file) {
        return FileOutcome::Failed(format!("{}: {}: No such file or directory", op, file));
    }
    match source.read_all(file) {
        Ok(contents) => FileOutcome::Content {
            file: file.to_string(),
            text: apply_window(op, mode, &contents, count),
        },
        Err(e) => FileOutcome::Failed(format!("{}: {}: {}", op, file, e)),
    }
}

fn apply_window(op: Operation, mode: Mode, contents: &str, count: usize) -> String {
    match (mode, op) {
        (Mode::Lines, Operation::Head) => window::first_lines(contents, count),
        (Mode::Lines, Operation::Tail) => window::last_lines(contents, count),
        (Mode::Bytes, Operation::Head) => window::first_bytes(contents, count),
        (Mode::Bytes, Operation::Tail) => window::last_bytes(contents, count),
    }
}

/// A single file prints bare; several files get `==> name <==` banners
/// on successes and a blank line between entries, in request order.
fn format_outcomes(outcomes: Vec<FileOutcome>) -> String {
    if outcomes.len() == 1 {
        return match outcomes.into_iter().next() {
            Some(FileOutcome::Content { text, .. }) => text,
            Some(FileOutcome::Failed(message)) => message,
            None => String::new(),
        };
    }
    outcomes
        .into_iter()
        .map(|outcome| match outcome {
            FileOutcome::Content { file, text } => format!("==> {} <==\n{}", file, text),
            FileOutcome::Failed(message) => message,
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
