use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DredgeError, Result};

/// One side's pre-tokenized records, together with the per-token field ids.
///
/// `records[i][j]` is an opaque integer token; `fields[i][j]` is the id of
/// the field that token was produced from. The two tables always have the
/// same shape. Tokenization happens upstream -- this crate never sees the
/// original strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenTable {
    /// Per-record token sequences, in prefix order.
    pub records: Vec<Vec<u32>>,

    /// Per-token field ids, same shape as `records`.
    pub fields: Vec<Vec<u32>>,
}

impl TokenTable {
    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that the field-id table mirrors the record table row by row.
    pub fn validate_shape(&self, side: &str) -> Result<()> {
        if self.fields.len() != self.records.len() {
            return Err(DredgeError::invalid(format!(
                "{side} field table has {} rows, record table has {}",
                self.fields.len(),
                self.records.len()
            )));
        }
        for (i, (rec, fld)) in self.records.iter().zip(&self.fields).enumerate() {
            if rec.len() != fld.len() {
                return Err(DredgeError::invalid(format!(
                    "{side} record {i}: {} tokens but {} field ids",
                    rec.len(),
                    fld.len()
                )));
            }
        }
        Ok(())
    }

    /// Project the table onto a subset of fields, keeping only the tokens
    /// whose field id is in `keep`. Per-record position order is preserved;
    /// rows may come out empty.
    pub fn project(&self, keep: &HashSet<u32>) -> TokenTable {
        let mut records = Vec::with_capacity(self.records.len());
        let mut fields = Vec::with_capacity(self.fields.len());

        for (rec, fld) in self.records.iter().zip(&self.fields) {
            let mut new_rec = Vec::new();
            let mut new_fld = Vec::new();
            for (&token, &field) in rec.iter().zip(fld) {
                if keep.contains(&field) {
                    new_rec.push(token);
                    new_fld.push(field);
                }
            }
            records.push(new_rec);
            fields.push(new_fld);
        }

        TokenTable { records, fields }
    }
}
