use crate::HostError;
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

/// Asks `question` on `output` and parses one line of `input`.
///
/// An empty answer means `default`; anything that does not parse or is not
/// above zero is `InvalidInput`.
pub fn prompt_positive<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    default: T,
) -> Result<T, HostError>
where
    T: FromStr + Default + PartialOrd,
{
    write!(output, "{question}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    let value = answer
        .parse()
        .map_err(|_| HostError::InvalidInput(format!("{answer:?} is not a positive integer")))?;
    positive(value, question.trim_end_matches([':', ' ']))
}

pub fn positive<T: Default + PartialOrd>(value: T, what: &str) -> Result<T, HostError> {
    if value > T::default() {
        Ok(value)
    } else {
        tracing::warn!("rejected non-positive {what}");
        Err(HostError::InvalidInput(format!("{what} must be positive")))
    }
}
