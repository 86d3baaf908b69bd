//! Interactive menu — main menu, per-cipher sub-menus, demonstrations
//!
//! Generic over reader/writer so the loop can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use classical_ciphers::demo;
use classical_ciphers::dispatch::{run, Request};
use classical_ciphers::{CipherKind, Operation, PaddingMode};
use tracing::debug;

const RULE_WIDTH: usize = 60;

pub struct Menu<R, W> {
    input: R,
    output: W,
    padding: PaddingMode,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, padding: PaddingMode) -> Self {
        Self {
            input,
            output,
            padding,
        }
    }

    /// Print `message`, read one line. `None` once stdin is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn main_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "CLASSICAL CIPHERS")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "\nSelect Cipher Algorithm:")?;
        for (n, cipher) in CipherKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {cipher} Cipher", n + 1)?;
        }
        writeln!(self.output, "5. Run All Demonstrations")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Main loop. Returns when the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.main_menu()?;
            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.cipher_menu(CipherKind::Caesar)?,
                "2" => self.cipher_menu(CipherKind::Vigenere)?,
                "3" => self.cipher_menu(CipherKind::RailFence)?,
                "4" => self.cipher_menu(CipherKind::Columnar)?,
                "5" => self.demonstrations()?,
                "6" => {
                    writeln!(self.output, "\nGoodbye.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please select 1-6.")?,
            }
        }
        writeln!(self.output, "\nInput closed, exiting.")?;
        Ok(())
    }

    fn param_prompt(cipher: CipherKind) -> &'static str {
        match cipher {
            CipherKind::Caesar => "Enter shift value (0-25): ",
            CipherKind::Vigenere | CipherKind::Columnar => "Enter key (alphabetic only): ",
            CipherKind::RailFence => "Enter number of rails (≥2): ",
        }
    }

    fn cipher_menu(&mut self, cipher: CipherKind) -> Result<()> {
        writeln!(
            self.output,
            "\n--- {} CIPHER ---",
            cipher.to_string().to_uppercase()
        )?;

        let mut operations = vec![Operation::Encrypt, Operation::Decrypt];
        if cipher.can_visualize() {
            operations.push(Operation::Visualize);
        }
        let back = operations.len() + 1;

        loop {
            writeln!(self.output, "\n1. Encrypt")?;
            writeln!(self.output, "2. Decrypt")?;
            if cipher.can_visualize() {
                writeln!(self.output, "3. Visualize")?;
            }
            writeln!(self.output, "{back}. Back to Main Menu")?;

            let Some(choice) = self.prompt("\nEnter choice: ")? else {
                return Ok(());
            };
            let picked = choice.trim().parse::<usize>().ok();
            let operation = match picked {
                Some(n) if n == back => return Ok(()),
                Some(n) if (1..back).contains(&n) => operations[n - 1],
                _ => {
                    writeln!(self.output, "Invalid choice")?;
                    continue;
                }
            };

            let Some(text) = self.prompt("Enter text: ")? else {
                return Ok(());
            };
            let Some(param) = self.prompt(Self::param_prompt(cipher))? else {
                return Ok(());
            };

            let request = Request::new(cipher, operation, text, param);
            debug!(?request, "menu request");
            match run(&request, self.padding) {
                Ok(out) => match operation {
                    Operation::Encrypt => writeln!(self.output, "Encrypted: {out}")?,
                    Operation::Decrypt => writeln!(self.output, "Decrypted: {out}")?,
                    Operation::Visualize => writeln!(self.output, "\n{out}")?,
                },
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    fn demonstrations(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}\nRUNNING ALL CIPHER DEMONSTRATIONS\n{rule}")?;
        write!(self.output, "{}", demo::render(&demo::samples()?))?;
        writeln!(self.output, "{rule}\nALL DEMONSTRATIONS COMPLETED\n{rule}")?;
        Ok(())
    }
}
