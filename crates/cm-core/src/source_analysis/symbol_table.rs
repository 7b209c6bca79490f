// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The scanner's symbol table.
//!
//! The table maps each KEYWORD/ID lexeme to its class and, for identifiers,
//! the line of its first legitimate occurrence. Keywords are pre-populated
//! with no first-seen line. Entries keep insertion order; `symbol_table.txt`
//! sorts alphabetically at render time, so both orderings are available.
//!
//! An identifier entry can be retroactively deleted when a later illegal
//! character proves the identifier was never a real token (see the scanner's
//! illegal-character protocol).

use ecow::EcoString;

use super::token::KEYWORDS;

/// The class of a symbol-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// A pre-populated reserved word.
    Keyword,
    /// A user identifier.
    Id,
}

/// One symbol-table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    lexeme: EcoString,
    class: SymbolClass,
    first_line: Option<u32>,
}

impl SymbolEntry {
    /// Returns the lexeme.
    #[must_use]
    pub fn lexeme(&self) -> &EcoString {
        &self.lexeme
    }

    /// Returns the entry class.
    #[must_use]
    pub const fn class(&self) -> SymbolClass {
        self.class
    }

    /// Returns the first-seen line (`None` for keywords).
    #[must_use]
    pub const fn first_line(&self) -> Option<u32> {
        self.first_line
    }
}

/// An insertion-ordered symbol table pre-populated with the keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Creates a table holding the seven keywords and nothing else.
    #[must_use]
    pub fn new() -> Self {
        let entries = KEYWORDS
            .iter()
            .map(|kw| SymbolEntry {
                lexeme: EcoString::from(*kw),
                class: SymbolClass::Keyword,
                first_line: None,
            })
            .collect();
        Self { entries }
    }

    fn position(&self, lexeme: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.lexeme == lexeme)
    }

    /// Records an identifier occurrence.
    ///
    /// The first occurrence wins: a lexeme already present keeps its
    /// original first-seen line.
    pub fn insert_id(&mut self, lexeme: &str, line: u32) {
        if self.position(lexeme).is_none() {
            self.entries.push(SymbolEntry {
                lexeme: EcoString::from(lexeme),
                class: SymbolClass::Id,
                first_line: Some(line),
            });
        }
    }

    /// Removes an identifier entry, if present.
    ///
    /// Keyword entries are never removed. Returns `true` if an entry was
    /// deleted.
    pub fn remove_id(&mut self, lexeme: &str) -> bool {
        match self.position(lexeme) {
            Some(index) if self.entries[index].class == SymbolClass::Id => {
                self.entries.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Looks up an entry by lexeme.
    #[must_use]
    pub fn get(&self, lexeme: &str) -> Option<&SymbolEntry> {
        self.position(lexeme).map(|i| &self.entries[i])
    }

    /// Returns `true` if the lexeme has an entry.
    #[must_use]
    pub fn contains(&self, lexeme: &str) -> bool {
        self.position(lexeme).is_some()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Returns every lexeme sorted alphabetically, the order used by
    /// `symbol_table.txt`.
    #[must_use]
    pub fn sorted_lexemes(&self) -> Vec<EcoString> {
        let mut lexemes: Vec<EcoString> = self.entries.iter().map(|e| e.lexeme.clone()).collect();
        lexemes.sort_unstable();
        lexemes
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table is empty (never the case in practice).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_keywords_only() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 7);
        assert!(table.contains("if"));
        assert!(table.contains("return"));
        assert_eq!(table.get("if").map(SymbolEntry::first_line), Some(None));
        assert!(!table.contains("x"));
    }

    #[test]
    fn first_occurrence_wins() {
        let mut table = SymbolTable::new();
        table.insert_id("x", 3);
        table.insert_id("x", 9);
        let entry = table.get("x").unwrap();
        assert_eq!(entry.class(), SymbolClass::Id);
        assert_eq!(entry.first_line(), Some(3));
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn remove_id_never_touches_keywords() {
        let mut table = SymbolTable::new();
        table.insert_id("x", 1);
        assert!(table.remove_id("x"));
        assert!(!table.contains("x"));
        assert!(!table.remove_id("if"));
        assert!(table.contains("if"));
        assert!(!table.remove_id("never_inserted"));
    }

    #[test]
    fn sorted_lexemes_is_alphabetical() {
        let mut table = SymbolTable::new();
        table.insert_id("zebra", 1);
        table.insert_id("apple", 2);
        let sorted = table.sorted_lexemes();
        assert_eq!(sorted.first().map(EcoString::as_str), Some("apple"));
        assert_eq!(sorted.last().map(EcoString::as_str), Some("zebra"));
        let mut check = sorted.clone();
        check.sort();
        assert_eq!(sorted, check);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut table = SymbolTable::new();
        table.insert_id("second", 1);
        table.insert_id("first", 2);
        let ids: Vec<&str> = table
            .entries()
            .iter()
            .filter(|e| e.class() == SymbolClass::Id)
            .map(|e| e.lexeme().as_str())
            .collect();
        assert_eq!(ids, ["second", "first"]);
    }
}
