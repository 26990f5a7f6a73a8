//! Parsing and interactive prompting for squares and yes/no answers.
//!
//! The prompt loops are generic over `BufRead`/`Write` so the binary can run
//! them on stdin/stdout and tests on in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::core::square::Square;
use crate::error::SquareError;

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Parse either a numeric id (`"9"`) or a label (`"b1"`).
pub fn parse_square(board: &Board, text: &str) -> Result<Square, SquareError> {
    let t = text.trim();
    if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
        let id: i64 = t.parse().map_err(|_| SquareError::InvalidLabel {
            label: t.to_string(),
        })?;
        return board.square(id);
    }
    board.parse_label(t)
}

pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Print `prompt`, read a line, and repeat until `parse` accepts it.
///
/// Returns `Ok(None)` when the input is exhausted.
pub fn prompt_until<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(v) = parse(line.trim()) {
            return Ok(Some(v));
        }
        tracing::debug!(input = line.trim(), "rejected input");
        writeln!(output, "{INVALID_INPUT}\n")?;
    }
}

pub fn prompt_square<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
    prompt: &str,
) -> io::Result<Option<Square>> {
    prompt_until(input, output, prompt, |t| parse_square(board, t).ok())
}

pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<bool>> {
    prompt_until(input, output, prompt, parse_yes_no)
}

/// Prompt text naming the first, second and last square of `board`.
pub fn square_prompt(board: &Board, which: &str) -> String {
    let first = board.squares().next();
    let last = board.squares().last();
    match (first, last) {
        (Some(a), Some(z)) => {
            let example = if board.size() > 1 {
                let b = Square::from_id_unchecked(board.size() as u16 + 1);
                format!(", {} or {}", board.label(b), b.id())
            } else {
                String::new()
            };
            format!(
                "Enter the {which} square (e.g., {} or {}{example}, up to {} or {}): ",
                board.label(a),
                a.id(),
                board.label(z),
                z.id()
            )
        }
        _ => format!("Enter the {which} square: "),
    }
}
