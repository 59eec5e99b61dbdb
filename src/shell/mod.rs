//! Line-oriented terminal front end for the dictionary store.
//!
//! Each input line is one action:
//! - `<term>` looks up a translation (`\<term>` when it starts with `+` or `:`)
//! - `+ <source> = <target>` adds a pair (`+ = <target>` reuses the last term
//!   that was not found)
//! - `:recent`, `:help`, `:quit`
//!
//! After every action the store's pending events are drained: status messages
//! are printed and added entries feed the recent list.

mod command;
mod prompt;

use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;

use crate::dictionary::{DictionaryStore, LookupResult, RecentList};
use crate::events::DictionaryEvent;

pub use command::{parse_command, Command};
use prompt::Prompt;

pub const HELP: &str = "\
Type a word to translate it (prefix it with \\ if it starts with + or :).
  + <source> = <target>   add a translation pair
  + = <target>            add a translation for the last word not found
  :recent                 show recently added pairs
  :help                   show this help
  :quit                   exit";

/// Interactive session over any line input and text output
pub struct Shell<R, W> {
    store: DictionaryStore,
    events: Receiver<DictionaryEvent>,
    recent: RecentList,
    input: R,
    output: W,
    /// Last term that was not found, offered as the source of the next add
    prefill: Option<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        store: DictionaryStore,
        events: Receiver<DictionaryEvent>,
        recent: RecentList,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            events,
            recent,
            input,
            output,
            prefill: None,
        }
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    pub fn prefill(&self) -> Option<&str> {
        self.prefill.as_deref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `:quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        self.drain_events()?;
        writeln!(self.output, "Type :help for usage.")?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let keep_going = self.execute(parse_command(&line))?;
            self.drain_events()?;
            if !keep_going {
                break;
            }
        }

        crate::debug!("Shell finished with {} entries", self.store.len());
        Ok(())
    }

    /// Execute one command; returns false when the session should end
    pub fn execute(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Empty => {}
            Command::Lookup(term) => self.lookup(&term)?,
            Command::Add { source, target } => self.add(source, &target)?,
            Command::Recent => self.print_recent()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Unknown(name) => {
                writeln!(self.output, "Unknown command :{} (try :help)", name)?
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn lookup(&mut self, term: &str) -> io::Result<()> {
        match self.store.lookup(term) {
            Some(LookupResult::Found { translation, .. }) => {
                writeln!(self.output, "{}", translation)?;
            }
            Some(LookupResult::NotFound { term }) => {
                writeln!(self.output, "not found (add it with: + = <translation>)")?;
                self.prefill = Some(term);
            }
            None => {}
        }
        Ok(())
    }

    fn add(&mut self, source: String, target: &str) -> io::Result<()> {
        let source = if source.trim().is_empty() {
            self.prefill.clone().unwrap_or_default()
        } else {
            source
        };

        let mut prompt = Prompt::new(&mut self.input, &mut self.output);
        match self.store.insert(&source, target, &mut prompt) {
            Ok(outcome) => {
                self.prefill = None;
                if let Some(old) = &outcome.replaced {
                    writeln!(
                        self.output,
                        "{} was \"{}\", now \"{}\"",
                        outcome.source, old, outcome.target
                    )?;
                }
            }
            Err(e) => crate::debug!("Insert rejected: {}", e),
        }
        Ok(())
    }

    fn print_recent(&mut self) -> io::Result<()> {
        if self.recent.is_empty() {
            writeln!(self.output, "(nothing added yet)")?;
        }
        for item in self.recent.items() {
            writeln!(self.output, "  {}", item)?;
        }
        Ok(())
    }

    fn drain_events(&mut self) -> io::Result<()> {
        while let Ok(event) = self.events.try_recv() {
            match event {
                DictionaryEvent::Status(payload) => {
                    writeln!(self.output, "  · {}", payload.message)?;
                }
                DictionaryEvent::EntryAdded(payload) => {
                    self.recent.push(&payload.source, &payload.target);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
