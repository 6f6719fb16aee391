use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::debug;

/// Line-oriented terminal I/O. `None` from any `ask*` means the input was closed.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Re-asks until `parse` accepts the answer, printing each rejection.
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!("Rejected input {:?}: {}", answer, e);
                    self.say(&e.to_string())?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vida_registry::{parse_age, validate_phone};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut p = prompter("Ana Silva \r\nPedro\n");
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("Ana Silva "));
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("Pedro"));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_age_retries_until_valid() {
        let mut p = prompter("-5\nabc\n25\n");
        assert_eq!(p.ask_until("Idade: ", parse_age).unwrap(), Some(25));

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Idade: ").count(), 3);
        assert!(output.contains("Por favor, insira uma idade válida (número maior que zero)."));
        assert!(output.contains("Erro: A idade deve ser um número inteiro. Tente novamente."));
    }

    #[test]
    fn test_phone_retries_once() {
        let mut p = prompter("123\n(11)999999999\n");
        assert_eq!(
            p.ask_until("Telefone: ", validate_phone).unwrap().as_deref(),
            Some("(11)999999999")
        );

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Telefone: ").count(), 2);
        assert!(output.contains("Erro: O telefone parece curto."));
    }

    #[test]
    fn test_ask_until_stops_on_eof() {
        let mut p = prompter("abc\n");
        assert_eq!(p.ask_until("Idade: ", parse_age).unwrap(), None);
    }
}
