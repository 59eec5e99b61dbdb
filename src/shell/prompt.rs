// Terminal yes/no prompt used for duplicate target terms

use std::io::{BufRead, Write};

use crate::dictionary::DuplicateConfirmer;

/// Asks on the shell's own input/output; anything but "y"/"yes" declines
pub struct Prompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, source: &str, target: &str) -> std::io::Result<bool> {
        write!(
            self.output,
            "\"{}\" is already in the dictionary. Add \"{}\" anyway? [y/N] ",
            target, source
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> DuplicateConfirmer for Prompt<'_, R, W> {
    fn confirm_duplicate(&mut self, source: &str, target: &str) -> bool {
        self.ask(source, target).unwrap_or_else(|e| {
            crate::warn!("Duplicate prompt failed, treating as no: {}", e);
            false
        })
    }
}
