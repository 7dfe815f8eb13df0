//! Line-oriented console with a prompt-or-cancel primitive
//!
//! Every read in the workflow goes through [`Console`]. A read either yields
//! a value or an [`Interrupt`] that unwinds the enclosing operation: the user
//! typed `Q`, input failed validation, stdin closed, or the terminal failed.

use biblio_core::errors::BiblioError;
use biblio_core::rules::validation::{is_cancel, validate_selection};
use std::io::{BufRead, Write};

/// Why a prompt did not produce a value
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// The user typed `Q`
    Cancelled,
    /// Input failed validation; the enclosing form restarts
    Invalid(BiblioError),
    /// A store read or write failed
    Store(BiblioError),
    /// Stdin reached end of file
    EndOfInput,
    /// Reading or writing the terminal failed
    Io(BiblioError),
}

impl From<std::io::Error> for Interrupt {
    fn from(err: std::io::Error) -> Self {
        Interrupt::Io(err.into())
    }
}

/// Result of one interactive step
pub type Flow<T> = std::result::Result<T, Interrupt>;

/// Lift a store result into a [`Flow`]
pub fn store<T>(result: biblio_core::Result<T>) -> Flow<T> {
    result.map_err(Interrupt::Store)
}

/// A numbered menu whose entries map to a choice type
pub trait Menu: Copy + 'static {
    /// Banner printed above the entries
    const TITLE: &'static str;

    /// Entries in display order; entry `i` is selected by typing `i + 1`
    const ENTRIES: &'static [(Self, &'static str)];

    /// Hint printed below the entries
    const ESCAPE_HINT: &'static str = "Or enter Q to cancel.";
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (tests inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, text: impl AsRef<str>) -> Flow<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print a recoverable error in the form the user is re-asked after
    pub fn report(&mut self, err: &BiblioError) -> Flow<()> {
        self.say(format!("Error: {}; Please try again.", err))
    }

    /// Show `prompt` and read one raw line, without its line terminator
    ///
    /// A line that is not UTF-8 is consumed whole and reported as
    /// [`Interrupt::Invalid`], so the caller re-asks instead of failing.
    pub fn read_line(&mut self, prompt: &str) -> Flow<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        String::from_utf8(bytes).map_err(|_| Interrupt::Invalid(BiblioError::InvalidEncoding))
    }

    /// Read a line for a numbered choice, re-asking while it is not UTF-8
    pub fn choice_line(&mut self, prompt: &str) -> Flow<String> {
        loop {
            match self.prompt(prompt) {
                Err(Interrupt::Invalid(err)) => self.report(&err)?,
                other => return other,
            }
        }
    }

    /// Read a line, treating `Q` as cancellation
    pub fn prompt(&mut self, prompt: &str) -> Flow<String> {
        let line = self.read_line(prompt)?;
        if is_cancel(&line) {
            return Err(Interrupt::Cancelled);
        }
        Ok(line)
    }

    /// Read and validate a single field
    ///
    /// A validation failure is returned as [`Interrupt::Invalid`] so the
    /// caller can restart its whole form.
    pub fn field<T, F>(&mut self, prompt: &str, validate: F) -> Flow<T>
    where
        F: FnOnce(&str) -> biblio_core::Result<T>,
    {
        let line = self.prompt(prompt)?;
        validate(&line).map_err(Interrupt::Invalid)
    }

    /// Show a numbered listing and read a selection from it
    ///
    /// Only the selection is re-asked on bad input. Returns the zero-based
    /// index of the chosen item.
    pub fn select<T, F>(&mut self, title: &str, items: &[T], label: F) -> Flow<usize>
    where
        F: Fn(&T) -> String,
    {
        self.say("")?;
        self.say(format!("******** {} ********", title))?;
        for (i, item) in items.iter().enumerate() {
            self.say(format!("{}. {}", i + 1, label(item)))?;
        }

        loop {
            let line = self.choice_line("Enter a number from the list, or Q to cancel: ")?;
            match validate_selection(&line, items.len()) {
                Ok(index) => return Ok(index),
                Err(err) => self.report(&err)?,
            }
        }
    }

    /// Show a menu and read a choice, redisplaying it until the input is valid
    pub fn menu<M: Menu>(&mut self) -> Flow<M> {
        loop {
            self.say("")?;
            self.say(format!("******** {} ********", M::TITLE))?;
            for (i, (_, label)) in M::ENTRIES.iter().enumerate() {
                self.say(format!("{}. {}", i + 1, label))?;
            }
            self.say("")?;
            self.say(M::ESCAPE_HINT)?;

            let picked = self.prompt("> ").and_then(|line| {
                validate_selection(&line, M::ENTRIES.len()).map_err(Interrupt::Invalid)
            });
            match picked {
                Ok(index) => return Ok(M::ENTRIES[index].0),
                Err(Interrupt::Invalid(_)) => self.say("Please select a valid option.")?,
                Err(other) => return Err(other),
            }
        }
    }
}
