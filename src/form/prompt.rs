//! Interactive field entry

use std::io::{self, BufRead, Write};

use super::field::Field;
use super::state::FormState;

/// Prompt for every field in declared order
///
/// Each answer replaces the field's value with the line read, minus its line
/// terminator. An empty answer keeps the current value. Input ending early
/// leaves the remaining fields untouched.
pub fn prompt_fields<R: BufRead, W: Write>(
    state: &mut FormState,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    for field in Field::ALL {
        let current = state.fields().get(field);
        if current.is_empty() {
            write!(output, "{}: ", field.prompt())?;
        } else {
            write!(output, "{} [{}]: ", field.prompt(), current)?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if !answer.is_empty() {
            state.set_field(field, answer);
        }
    }
    Ok(())
}
