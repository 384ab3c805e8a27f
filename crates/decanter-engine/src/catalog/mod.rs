//! Static liquid configuration.
//!
//! The set of liquids a game offers is data, not code. It is written as plain
//! text, one liquid per line, and parsed once at startup:
//!
//! ```text
//! // name   color
//! water     #4aa3ffaa
//! coffee    #3b2414
//! ```
//!
//! Liquids receive ids in declaration order starting at `0`.

mod error;
mod parse;

use std::str::FromStr;

use decanter_liquid::{LiquidId, LiquidType};
use log::debug;

pub use error::CatalogError;

#[derive(Debug, Clone, Default)]
pub struct LiquidCatalog {
    liquids: Vec<LiquidType>,
}

impl LiquidCatalog {
    /// Parses catalog source.
    ///
    /// # Errors
    /// [`CatalogError`] with the 1-based position of a malformed line or of a
    /// name declared twice.
    pub fn parse(src: &str) -> Result<Self, CatalogError> {
        let entries = parse::parse_entries(src)?;
        let mut liquids: Vec<LiquidType> = Vec::with_capacity(entries.len());

        for entry in entries {
            if liquids.iter().any(|l| l.name() == entry.name) {
                return Err(CatalogError::new(
                    format!("liquid `{}` is declared more than once", entry.name),
                    entry.line,
                    entry.col,
                ));
            }
            let id = LiquidId(liquids.len() as u32);
            liquids.push(LiquidType::new(id, entry.name, entry.color));
        }

        debug!("loaded liquid catalog with {} entries", liquids.len());
        Ok(Self { liquids })
    }

    /// Looks a liquid up by name.
    pub fn get(&self, name: &str) -> Option<&LiquidType> {
        self.liquids.iter().find(|l| l.name() == name)
    }

    pub fn by_id(&self, id: LiquidId) -> Option<&LiquidType> {
        self.liquids.get(id.0 as usize).filter(|l| l.id() == id)
    }

    /// Iterates liquids in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LiquidType> {
        self.liquids.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.liquids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.liquids.is_empty()
    }
}

impl FromStr for LiquidCatalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
