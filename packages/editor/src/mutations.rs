//! # Document Mutations
//!
//! High-level semantic operations on a moment document.
//!
//! Each mutation validates before applying; a rejected mutation leaves
//! the document untouched. The editing session regenerates the artifact
//! after every successful apply, so a mutation is also the unit of
//! regeneration.

use momento_model::{ActivityData, BlockId, BlockKind, ColumnSide, Layout, MomentDocument};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations issued by the authoring surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Switch the document layout.
    SetLayout { layout: Layout },

    /// Set the cover banner parameters.
    SetLessonInfo { number: u32, title: String },

    /// Insert a new block; the index is clamped to the column length.
    InsertBlock {
        column: ColumnSide,
        index: usize,
        kind: BlockKind,
    },

    /// Replace a block's content, keeping its id and position.
    UpdateBlock { block_id: BlockId, kind: BlockKind },

    /// Relocate a block to a column and index.
    MoveBlock {
        block_id: BlockId,
        column: ColumnSide,
        index: usize,
    },

    RemoveBlock { block_id: BlockId },

    /// Replace the payload of an activity block.
    SetActivityData {
        block_id: BlockId,
        data: ActivityData,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Block {0} is not an activity")]
    NotAnActivity(BlockId),
}

impl Mutation {
    /// Apply the mutation to a document with validation.
    pub fn apply(&self, doc: &mut MomentDocument) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::SetLayout { layout } => {
                doc.layout = *layout;
            }

            Mutation::SetLessonInfo { number, title } => {
                doc.lesson_number = *number;
                doc.lesson_title = title.clone();
            }

            Mutation::InsertBlock {
                column,
                index,
                kind,
            } => {
                doc.insert_block(*column, *index, kind.clone());
            }

            Mutation::UpdateBlock { block_id, kind } => {
                let block = doc
                    .find_block_mut(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                block.kind = kind.clone();
            }

            Mutation::MoveBlock {
                block_id,
                column,
                index,
            } => {
                let block = doc
                    .remove_block(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                let target = doc.column_mut(*column);
                let index = (*index).min(target.len());
                target.insert(index, block);
            }

            Mutation::RemoveBlock { block_id } => {
                doc.remove_block(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
            }

            Mutation::SetActivityData { block_id, data } => {
                let block = doc
                    .find_block_mut(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                block.kind = BlockKind::Activity { data: data.clone() };
            }
        }

        Ok(())
    }

    /// Validate without applying.
    pub fn validate(&self, doc: &MomentDocument) -> Result<(), MutationError> {
        match self {
            Mutation::SetLayout { .. }
            | Mutation::SetLessonInfo { .. }
            | Mutation::InsertBlock { .. } => Ok(()),

            Mutation::UpdateBlock { block_id, .. }
            | Mutation::MoveBlock { block_id, .. }
            | Mutation::RemoveBlock { block_id } => {
                doc.find_block(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                Ok(())
            }

            Mutation::SetActivityData { block_id, .. } => {
                let (_, block) = doc
                    .find_block(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                match block.kind {
                    BlockKind::Activity { .. } => Ok(()),
                    _ => Err(MutationError::NotAnActivity(block_id.clone())),
                }
            }
        }
    }
}
