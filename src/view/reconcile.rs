//! Piece reconciliation
//!
//! Diffs the displayed piece set against a full incoming piece list and
//! produces three disjoint operation lists keyed by [`PieceKey`]:
//!
//! - **additions**: identities only in the incoming list
//! - **updates**: identities in both whose value changed (moved or promoted)
//! - **removals**: identities only in the displayed set
//!
//! The result is a pure function of its inputs. Additions and updates keep
//! incoming order; removals follow key order, since the displayed set is a
//! `BTreeMap`. Reconciling the same list twice yields no operations.

use super::error::{ViewError, ViewResult};
use crate::game::{ChessPiece, PieceKey};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceAddition {
    pub key: PieceKey,
    pub piece: ChessPiece,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceUpdate {
    pub key: PieceKey,
    pub previous: ChessPiece,
    pub current: ChessPiece,
}

impl PieceUpdate {
    pub fn moved(&self) -> bool {
        self.previous.position != self.current.position
    }

    pub fn morphed(&self) -> bool {
        self.previous.piece_id != self.current.piece_id || self.previous.color != self.current.color
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRemoval {
    pub key: PieceKey,
    pub piece: ChessPiece,
}

/// Output of [`reconcile`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOps {
    pub additions: Vec<PieceAddition>,
    pub updates: Vec<PieceUpdate>,
    pub removals: Vec<PieceRemoval>,
}

impl ReconcileOps {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.updates.is_empty() && self.removals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.additions.len() + self.updates.len() + self.removals.len()
    }

    /// Applies the operations to a plain identity map
    pub fn apply_to(&self, pieces: &mut BTreeMap<PieceKey, ChessPiece>) {
        for addition in &self.additions {
            pieces.insert(addition.key.clone(), addition.piece.clone());
        }
        for update in &self.updates {
            pieces.insert(update.key.clone(), update.current.clone());
        }
        for removal in &self.removals {
            pieces.remove(&removal.key);
        }
    }
}

/// Computes the operations turning `current` into `incoming`
///
/// Fails with [`ViewError::DuplicateIdentity`] if two incoming pieces share a
/// key; nothing is computed in that case.
pub fn reconcile(
    current: &BTreeMap<PieceKey, ChessPiece>,
    incoming: &[ChessPiece],
) -> ViewResult<ReconcileOps> {
    let mut seen = BTreeSet::new();
    let mut ops = ReconcileOps::default();

    for piece in incoming {
        let key = piece.key();
        if !seen.insert(key.clone()) {
            error!("[RECONCILE] Duplicate identity {} in incoming pieces", key);
            return Err(ViewError::DuplicateIdentity { key });
        }

        match current.get(&key) {
            None => ops.additions.push(PieceAddition {
                key,
                piece: piece.clone(),
            }),
            Some(previous) if previous != piece => ops.updates.push(PieceUpdate {
                key,
                previous: previous.clone(),
                current: piece.clone(),
            }),
            Some(_) => {}
        }
    }

    ops.removals = current
        .iter()
        .filter(|(key, _)| !seen.contains(*key))
        .map(|(key, piece)| PieceRemoval {
            key: key.clone(),
            piece: piece.clone(),
        })
        .collect();

    debug!(
        "[RECONCILE] {} added, {} updated, {} removed",
        ops.additions.len(),
        ops.updates.len(),
        ops.removals.len()
    );

    Ok(ops)
}
