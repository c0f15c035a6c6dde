use std::io::BufRead;

use anyhow::bail;
use lotto_common::error::LottoError;
use tracing::error;

use crate::terminal::print;

/// Shows `prompt` and reads lines until `parse` accepts one.
///
/// Rejected lines are reported and asked for again. Running out of input ends
/// the session with an error.
pub fn prompt_until<R, T, F>(reader: &mut R, prompt: &str, mut parse: F) -> anyhow::Result<T>
where
    R: BufRead,
    F: FnMut(&str) -> Result<T, LottoError>,
{
    loop {
        print::print(prompt);

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("input ended before a valid value was entered");
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => error!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::parse::parse_money;
    use std::io::Cursor;

    #[test]
    fn retries_until_valid() {
        let mut input = Cursor::new("abc\n999\n1500\n14000\n");
        let mut attempts = 0;

        let money = prompt_until(&mut input, "money?", |line| {
            attempts += 1;
            let amount = parse_money(line)?;
            if amount < 1000 || amount % 1000 != 0 {
                return Err(LottoError::NotDivisible { amount, unit: 1000 });
            }
            Ok(amount)
        })
        .unwrap();

        assert_eq!(money, 14_000);
        assert_eq!(attempts, 4);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut input = Cursor::new("abc\n");
        assert!(prompt_until(&mut input, "money?", parse_money).is_err());
    }
}
