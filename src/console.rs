//! Blocking prompt/response turns on the terminal.
//!
//! Everything interactive in the application goes through these two helpers,
//! which are generic over the reader and writer so tests can script the
//! whole exchange with a [std::io::Cursor].

use std::io::{BufRead, Write};

use crate::Error;

/// Print `question` on its own line and read one line of response.
///
/// The response is returned without its trailing line break; any other
/// whitespace is kept so free-text answers survive untouched.
///
/// # Errors
///
/// This function will return [Error::InputClosed] if the input stream has
/// ended, or [Error::Io] if the underlying reader or writer fails.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, Error> {
    writeln!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

/// Ask a yes/no question, re-asking until one of the two answers is given.
///
/// Answers are matched case-insensitively; anything other than "yes" or "no"
/// gets an explanatory message and another chance.
pub(crate) fn ask_question<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool, Error> {
    loop {
        let answer = prompt(input, output, question)?;

        match answer.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "Something went wrong, answer yes or no")?,
        }
    }
}
