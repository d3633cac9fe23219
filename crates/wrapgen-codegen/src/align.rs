//! Positional alignment of scanned and documented fields
//!
//! The scan side and the documentation side share no key: the i-th field
//! read by the serialization routine is assumed to be the i-th field the
//! documentation lists. Nothing checks that beyond the counts, so the
//! count check is surfaced explicitly.

use thiserror::Error;
use wrapgen_core::{DocField, FieldDescriptor};

/// The two sides disagree on how many fields a message has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field count mismatch: {scanned} scanned, {documented} documented")]
pub struct CountMismatch {
    pub scanned: usize,
    pub documented: usize,
}

/// One scanned field paired with its documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedField<'a> {
    pub index: usize,
    pub scan: &'a FieldDescriptor,
    pub doc: &'a DocField,
}

/// Result of aligning the two field lists by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<'a> {
    pub pairs: Vec<AlignedField<'a>>,
    /// Documented fields past the end of the scan
    pub unmatched_docs: &'a [DocField],
    /// Scanned fields past the end of the documentation
    pub unmatched_scans: &'a [FieldDescriptor],
    pub mismatch: Option<CountMismatch>,
}

impl<'a> Alignment<'a> {
    pub fn is_exact(&self) -> bool {
        self.mismatch.is_none()
    }

    /// The pairs, or the mismatch if the counts differ
    pub fn into_strict(self) -> Result<Vec<AlignedField<'a>>, CountMismatch> {
        match self.mismatch {
            Some(mismatch) => Err(mismatch),
            None => Ok(self.pairs),
        }
    }
}

/// Pair `scan[i]` with `doc[i]` for every index both sides have
pub fn align_by_index<'a>(scan: &'a [FieldDescriptor], doc: &'a [DocField]) -> Alignment<'a> {
    let pairs = scan
        .iter()
        .zip(doc)
        .enumerate()
        .map(|(index, (scan, doc))| AlignedField { index, scan, doc })
        .collect::<Vec<_>>();

    let matched = pairs.len();
    let mismatch = (scan.len() != doc.len()).then_some(CountMismatch {
        scanned: scan.len(),
        documented: doc.len(),
    });

    Alignment {
        pairs,
        unmatched_docs: &doc[matched..],
        unmatched_scans: &scan[matched..],
        mismatch,
    }
}

/// [`align_by_index`], failing on any count mismatch
pub fn align_by_index_strict<'a>(
    scan: &'a [FieldDescriptor],
    doc: &'a [DocField],
) -> Result<Vec<AlignedField<'a>>, CountMismatch> {
    align_by_index(scan, doc).into_strict()
}
