//! Whitespace-separated problem input: `n`, `n` vertex pairs, then A and B.

use anyhow::{bail, Context, Result};
use detour::Vector;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub const PROMPT_COUNT: &str = "Give the number of vertexes of a polygonal line L.";
pub const PROMPT_VERTICES: &str = "Give coordinates of vertexes of L: for each point give two real numbers, separated by space. Vertexes must by separated by space or by enter.";
pub const PROMPT_ENDPOINTS: &str = "Give coordinates of two points A and B in the same format";

/// Raw problem as read from the user; validated later by `Obstacle::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub vertices: Vec<Vector>,
    pub start: Vector,
    pub finish: Vector,
}

/// Lazy token stream; reads a new line only when the buffered ones run out,
/// so prompts interleave with interactive typing.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    fn next(&mut self, what: &str) -> Result<String> {
        while self.pending.is_empty() {
            let mut buf = String::new();
            let read = self
                .reader
                .read_line(&mut buf)
                .with_context(|| format!("reading {what}"))?;
            if read == 0 {
                bail!("unexpected end of input while reading {what}");
            }
            self.line += 1;
            self.pending.extend(buf.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    fn f64(&mut self, what: &str) -> Result<f64> {
        let tok = self.next(what)?;
        tok.parse::<f64>()
            .with_context(|| format!("line {}: {what}: `{tok}` is not a number", self.line))
    }

    fn point(&mut self, what: &str) -> Result<Vector> {
        let x = self.f64(what)?;
        let y = self.f64(what)?;
        Ok(Vector::new(x, y))
    }
}

/// Read a problem, optionally echoing the three prompts to `prompts` first.
pub fn read_problem<R: BufRead>(
    reader: R,
    mut prompts: Option<&mut dyn Write>,
) -> Result<Problem> {
    let mut toks = Tokens::new(reader);
    let mut prompt = |text: &str| -> Result<()> {
        if let Some(out) = prompts.as_mut() {
            writeln!(out, "{text}")?;
            out.flush()?;
        }
        Ok(())
    };

    prompt(PROMPT_COUNT)?;
    let tok = toks.next("vertex count")?;
    let n: usize = tok
        .parse()
        .with_context(|| format!("vertex count `{tok}` is not a non-negative integer"))?;

    prompt(PROMPT_VERTICES)?;
    let mut vertices = Vec::new();
    for i in 0..n {
        vertices.push(toks.point(&format!("vertex {i}"))?);
    }

    prompt(PROMPT_ENDPOINTS)?;
    let start = toks.point("point A")?;
    let finish = toks.point("point B")?;
    tracing::debug!(vertices = n, start = %start, finish = %finish, "input read");
    Ok(Problem {
        vertices,
        start,
        finish,
    })
}

/// Read from `path`, or interactively from stdin when `path` is `None`.
pub fn load(path: Option<&Path>, show_prompts: bool) -> Result<Problem> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_problem(BufReader::new(file), None)
                .with_context(|| format!("parsing {}", path.display()))
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let prompts: Option<&mut dyn Write> = if show_prompts {
                Some(&mut stdout)
            } else {
                None
            };
            read_problem(stdin.lock(), prompts).context("parsing stdin")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn reads_tokens_across_lines() {
        let text = "2\n0 1\n0 -1\n-1 0 1 0\n";
        let p = read_problem(Cursor::new(text), None).unwrap();
        assert_eq!(p.vertices, vec![Vector::new(0.0, 1.0), Vector::new(0.0, -1.0)]);
        assert_eq!(p.start, Vector::new(-1.0, 0.0));
        assert_eq!(p.finish, Vector::new(1.0, 0.0));
    }

    #[test]
    fn prompts_are_written_in_order() {
        let mut out: Vec<u8> = Vec::new();
        let prompts: Option<&mut dyn Write> = Some(&mut out);
        read_problem(Cursor::new("2 0 0 1 1 5 5 6 6"), prompts).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = format!("{PROMPT_COUNT}\n{PROMPT_VERTICES}\n{PROMPT_ENDPOINTS}\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn rejects_bad_numbers_and_truncation() {
        let err = read_problem(Cursor::new("two"), None).unwrap_err();
        assert!(err.to_string().contains("vertex count"));
        let err = read_problem(Cursor::new("2\n0 0\n1 x\n"), None).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
        let err = read_problem(Cursor::new("2 0 0 1 1 5 5"), None).unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.txt");
        fs::write(&path, "4\n0 0\n0 1\n1 1\n1 0\n-1 0.5\n2 0.5\n").unwrap();
        let p = load(Some(path.as_path()), true).unwrap();
        assert_eq!(p.vertices.len(), 4);
        assert_eq!(p.finish, Vector::new(2.0, 0.5));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load(Some(missing.as_path()), false).unwrap_err();
        assert!(err.to_string().starts_with("opening"));
    }
}
