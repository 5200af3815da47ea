//! Product Record
//!
//! One inventory entry and its line-oriented textual encoding:
//! `<id> <name> <price> <quantity>\n`. Fields are whitespace separated and the
//! name is not escaped, so a name containing whitespace will not survive a
//! reload intact.

use crate::types::{Price, ProductId, Quantity};
use serde::Serialize;
use std::io::{self, Write};

/// Record: a single product entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    id: ProductId,
    name: String,
    price: Price,
    quantity: Quantity,
}

impl Record {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, quantity: Quantity) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Encode as a single newline-terminated line.
    ///
    /// Prices use the shortest representation that parses back to the same
    /// value, so `12.0` is written as `12`.
    pub fn encode(&self) -> String {
        format!("{} {} {} {}\n", self.id, self.name, self.price, self.quantity)
    }

    /// Write the encoded line to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.encode().as_bytes())
    }

    /// Decode the next record from a stream of whitespace-delimited tokens.
    ///
    /// Consumes up to four tokens. Returns `None` when the tokens run out or a
    /// token does not parse as its field type; callers treat that as the end
    /// of the data.
    pub fn decode<'a, I>(tokens: &mut I) -> Option<Record>
    where
        I: Iterator<Item = &'a str>,
    {
        let id = tokens.next()?.parse::<ProductId>().ok()?;
        let name = tokens.next()?.to_string();
        let price = tokens.next()?.parse::<Price>().ok()?;
        let quantity = tokens.next()?.parse::<Quantity>().ok()?;
        Some(Record {
            id,
            name,
            price,
            quantity,
        })
    }
}
