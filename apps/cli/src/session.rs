//! Interactive prompting session.
//!
//! The session owns its input and output handles explicitly; there is
//! no process-global console state. Each run loops over whole notes
//! until the user declines another round or the input ends.

use std::io::{self, BufRead, Write};

use log::debug;
use rust_decimal::Decimal;

use rateio_core::allocation::allocate;
use rateio_core::errors::Error;
use rateio_core::formatting::parse_amount;

use crate::report;
use crate::style::Style;

/// One asset line as entered by the user.
struct NoteLine {
    name: String,
    value: Decimal,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            style: Style::new(styled),
        }
    }

    /// Runs note rounds until the user declines another one or the
    /// input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_header()?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.style.bold("✦ Nova simulação ✦"))?;

            let Some(lines) = self.collect_lines()? else { break };
            let Some(target_total) =
                self.prompt_amount("Valor total da nota (liquidação)")?
            else {
                break;
            };

            let names: Vec<String> = lines.iter().map(|l| l.name.clone()).collect();
            let values: Vec<Decimal> = lines.iter().map(|l| l.value).collect();
            debug!("processing note with {} lines", lines.len());

            match allocate(&names, &values, target_total) {
                Ok(result) => report::render(&mut self.output, &result, &self.style)?,
                Err(err @ Error::InvalidAllocationInput(_)) => {
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "{}",
                        self.style.red(&format!("Erro de validação: {err}"))
                    )?;
                    writeln!(
                        self.output,
                        "{}",
                        self.style.dim("Verifique os valores e tente novamente.")
                    )?;
                    continue;
                }
                Err(err) => {
                    writeln!(
                        self.output,
                        "{}",
                        self.style.red(&format!("Erro inesperado: {err}"))
                    )?;
                    continue;
                }
            }

            writeln!(self.output)?;
            match self.confirm("Deseja processar outra nota?")? {
                Some(true) => self.print_header()?,
                _ => break,
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", self.style.bold("Até logo!"))?;
        Ok(())
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            self.style
                .bold("◆ CALCULADORA DE ATIVOS · rateio proporcional de custos")
        )?;
        writeln!(
            self.output,
            "{}",
            self.style.dim("Valores no formato BRL (ex: 1.500,00)")
        )
    }

    /// Collects the asset lines of one note. Returns `None` when the
    /// input ends.
    fn collect_lines(&mut self) -> io::Result<Option<Vec<NoteLine>>> {
        let Some(count) = self.prompt_count("Quantos ativos compõem a nota?")? else {
            return Ok(None);
        };

        let mut lines = Vec::with_capacity(count);
        for i in 0..count {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.style.bold(&format!("▶ Ativo #{}", i + 1)))?;
            let Some(name) = self.prompt_line("  Nome/Ticker")? else {
                return Ok(None);
            };
            let name = name.trim().to_uppercase();
            let Some(value) =
                self.prompt_amount(&format!("  Valor sem o custo de aquisição ({name})"))?
            else {
                return Ok(None);
            };
            lines.push(NoteLine { name, value });
        }
        Ok(Some(lines))
    }

    /// Prompts for a non-negative integer, re-prompting on malformed
    /// input. Returns `None` when the input ends.
    fn prompt_count(&mut self, label: &str) -> io::Result<Option<usize>> {
        loop {
            let Some(raw) = self.prompt_line(label)? else { return Ok(None) };
            match raw.trim().parse::<usize>() {
                Ok(count) => return Ok(Some(count)),
                Err(_) => {
                    writeln!(
                        self.output,
                        "{}",
                        self.style
                            .red("Entrada inválida! Informe um número inteiro.")
                    )?;
                }
            }
        }
    }

    /// Prompts for a BRL amount, re-prompting on malformed input.
    /// Returns `None` when the input ends.
    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        loop {
            let Some(raw) = self.prompt_line(label)? else { return Ok(None) };
            match parse_amount(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!("rejected amount input: {err}");
                    writeln!(
                        self.output,
                        "{}",
                        self.style.red(
                            "Entrada inválida! Informe um valor no formato BRL (ex: 1.500,00)."
                        )
                    )?;
                }
            }
        }
    }

    /// Prompts for a yes/no answer, re-prompting until one is given.
    /// Returns `None` when the input ends.
    fn confirm(&mut self, label: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(raw) = self.prompt_line(&format!("{label} [s/n]"))? else {
                return Ok(None);
            };
            match raw.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('s') | Some('y') => return Ok(Some(true)),
                Some('n') => return Ok(Some(false)),
                _ => {
                    writeln!(self.output, "{}", self.style.dim("Responda com s ou n."))?;
                }
            }
        }
    }

    /// Writes `label: ` and reads one line. Returns `None` on end of
    /// input.
    fn prompt_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
