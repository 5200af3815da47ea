//! Interactive Menu
//!
//! Numbered prompt loop over any `BufRead`/`Write` pair. Input is consumed as
//! whitespace-delimited tokens, so several answers may be typed on one line.

use crate::record::Record;
use crate::store::RecordStore;
use crate::views::format_records_text;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "Inventory Management System
1. Add Product
2. Remove Product
3. Update Product
4. Display Products
5. Exit
Enter your choice: ";

/// Menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    Display,
    Exit,
}

impl MenuChoice {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.parse::<i64>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Remove),
            3 => Some(MenuChoice::Update),
            4 => Some(MenuChoice::Display),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after handling a choice
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Whitespace token reader over a buffered input
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a token simply
    /// fails to parse as a menu choice or number.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

/// One interactive session against a store
pub struct MenuSession<'a, R, W> {
    store: &'a mut RecordStore,
    input: TokenReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(store: &'a mut RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input: TokenReader::new(input),
            output,
        }
    }

    /// Run until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            let flow = match MenuChoice::from_token(&token) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::Remove) => self.handle_remove()?,
                Some(MenuChoice::Update) => self.handle_update()?,
                Some(MenuChoice::Display) => {
                    self.output
                        .write_all(format_records_text(self.store.list()).as_bytes())?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    tracing::debug!(token = %token, "Invalid menu choice");
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    Flow::Continue
                }
            };
            match flow {
                Flow::Continue => {}
                Flow::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Flow::EndOfInput => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
            }
        }
    }

    fn handle_add(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt::<i32>("Enter Product ID: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(name) = self.prompt::<String>("Enter Product Name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt::<f64>("Enter Product Price: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(quantity) = self.prompt::<i32>("Enter Product Quantity: ")? else {
            return Ok(Flow::EndOfInput);
        };
        self.store.add(Record::new(id, name, price, quantity));
        Ok(Flow::Continue)
    }

    fn handle_remove(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt::<i32>("Enter Product ID to Remove: ")? else {
            return Ok(Flow::EndOfInput);
        };
        self.store.remove(id);
        Ok(Flow::Continue)
    }

    fn handle_update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt::<i32>("Enter Product ID to Update: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(name) = self.prompt::<String>("Enter New Product Name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt::<f64>("Enter New Product Price: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(quantity) = self.prompt::<i32>("Enter New Product Quantity: ")? else {
            return Ok(Flow::EndOfInput);
        };
        self.store.update(id, &name, price, quantity);
        Ok(Flow::Continue)
    }

    /// Prompt until a token parses as `T`. `None` at end of input.
    fn prompt<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;
            let Some(token) = self.input.next_token()? else {
                return Ok(None);
            };
            match token.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid number, please try again.")?,
            }
        }
    }
}
