use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hier_core::{ErrorInfo, HierError, HierarchyTag, LoopOrder, SchemaVersion, SelfEnergyTerms};

use crate::inputs::ExpansionInputs;
use crate::polynomial::Polynomial;

/// Schema version written by [`PolynomialTable::to_document`].
pub const TABLE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

fn table_error(info: ErrorInfo) -> HierError {
    HierError::Table(info)
}

fn unsupported(tag: HierarchyTag, order: LoopOrder) -> HierError {
    HierError::UnsupportedHierarchy(
        ErrorInfo::new("missing-expansion", "no expansion registered for tag and order")
            .with_context("tag", tag.name())
            .with_context("order", order.loops().to_string()),
    )
}

/// Closed-form expansion of the self-energy per hierarchy and loop order.
pub trait ExpansionTable: Send + Sync {
    /// Evaluates the (s1, s2, s12) expansion of `tag` at `order`.
    fn evaluate(
        &self,
        tag: HierarchyTag,
        order: LoopOrder,
        inputs: &ExpansionInputs,
    ) -> Result<SelfEnergyTerms, HierError>;

    /// Returns true when an expansion for (`tag`, `order`) exists.
    fn supports(&self, tag: HierarchyTag, order: LoopOrder) -> bool;
}

impl<F> ExpansionTable for F
where
    F: Fn(HierarchyTag, LoopOrder, &ExpansionInputs) -> Result<SelfEnergyTerms, HierError>
        + Send
        + Sync,
{
    fn evaluate(
        &self,
        tag: HierarchyTag,
        order: LoopOrder,
        inputs: &ExpansionInputs,
    ) -> Result<SelfEnergyTerms, HierError> {
        self(tag, order, inputs)
    }

    fn supports(&self, _tag: HierarchyTag, _order: LoopOrder) -> bool {
        true
    }
}

/// The three polynomials of one (tag, order) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionEntry {
    /// Hierarchy the entry belongs to.
    pub tag: HierarchyTag,
    /// Loop order of the entry.
    pub order: LoopOrder,
    /// Upper diagonal self-energy.
    pub s1: Polynomial,
    /// Lower diagonal self-energy.
    pub s2: Polynomial,
    /// Off-diagonal self-energy.
    pub s12: Polynomial,
}

/// Serialized form of a [`PolynomialTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Schema version of the document.
    pub schema_version: SchemaVersion,
    /// Entries in any order.
    pub entries: Vec<ExpansionEntry>,
}

/// Expansion table backed by explicit polynomials.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolynomialTable {
    entries: BTreeMap<(HierarchyTag, LoopOrder), ExpansionEntry>,
}

impl PolynomialTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry; fails when (tag, order) is already present.
    pub fn insert(&mut self, entry: ExpansionEntry) -> Result<(), HierError> {
        let key = (entry.tag, entry.order);
        if self.entries.contains_key(&key) {
            return Err(table_error(
                ErrorInfo::new("duplicate-entry", "expansion entry registered twice")
                    .with_context("tag", entry.tag.name())
                    .with_context("order", entry.order.loops().to_string()),
            ));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Builder form of [`PolynomialTable::insert`].
    pub fn with_entry(mut self, entry: ExpansionEntry) -> Result<Self, HierError> {
        self.insert(entry)?;
        Ok(self)
    }

    /// Number of registered (tag, order) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entry is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for (`tag`, `order`).
    pub fn entry(&self, tag: HierarchyTag, order: LoopOrder) -> Option<&ExpansionEntry> {
        self.entries.get(&(tag, order))
    }

    /// Builds a table from a document, validating version and uniqueness.
    pub fn from_document(document: TableDocument) -> Result<Self, HierError> {
        if !TABLE_SCHEMA.accepts(&document.schema_version) {
            let found = document.schema_version;
            return Err(table_error(
                ErrorInfo::new(
                    "schema-mismatch",
                    "expansion table schema version is not supported",
                )
                .with_context("found", format!("{}.{}.{}", found.major, found.minor, found.patch)),
            ));
        }
        document
            .entries
            .into_iter()
            .try_fold(Self::new(), |table, entry| table.with_entry(entry))
    }

    /// Serializable snapshot in canonical (tag, order) order.
    pub fn to_document(&self) -> TableDocument {
        TableDocument {
            schema_version: TABLE_SCHEMA,
            entries: self.entries.values().cloned().collect(),
        }
    }
}

impl ExpansionTable for PolynomialTable {
    fn evaluate(
        &self,
        tag: HierarchyTag,
        order: LoopOrder,
        inputs: &ExpansionInputs,
    ) -> Result<SelfEnergyTerms, HierError> {
        let entry = self.entry(tag, order).ok_or_else(|| unsupported(tag, order))?;
        Ok(SelfEnergyTerms::new(
            entry.s1.evaluate(inputs),
            entry.s2.evaluate(inputs),
            entry.s12.evaluate(inputs),
        ))
    }

    fn supports(&self, tag: HierarchyTag, order: LoopOrder) -> bool {
        self.entries.contains_key(&(tag, order))
    }
}
