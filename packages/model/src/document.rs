use crate::block::{BlockId, BlockKind, ContentBlock};
use crate::layout::Layout;
use serde::{Deserialize, Serialize};

/// Which of the two columns a block lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnSide {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

/// Ordered sequence of content blocks.
pub type Column = Vec<ContentBlock>;

/// Mints block ids unique within one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(format!("bloque-{}", self.next));
        self.next += 1;
        id
    }
}

/// The authoring model for one moment: a layout plus two columns.
///
/// Mutated only through explicit operations; the generated artifact is
/// recomputed from scratch after every mutation and never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentDocument {
    pub layout: Layout,
    pub left: Column,
    pub right: Column,
    /// Parameters of the cover banner; ignored by every other layout.
    pub lesson_number: u32,
    pub lesson_title: String,
    ids: IdGenerator,
}

impl MomentDocument {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            left: Vec::new(),
            right: Vec::new(),
            lesson_number: 1,
            lesson_title: String::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn column(&self, side: ColumnSide) -> &Column {
        match side {
            ColumnSide::Left => &self.left,
            ColumnSide::Right => &self.right,
        }
    }

    pub fn column_mut(&mut self, side: ColumnSide) -> &mut Column {
        match side {
            ColumnSide::Left => &mut self.left,
            ColumnSide::Right => &mut self.right,
        }
    }

    /// Append a block to a column, minting its id.
    pub fn add_block(&mut self, side: ColumnSide, kind: BlockKind) -> BlockId {
        let id = self.ids.next_id();
        let block = ContentBlock {
            id: id.clone(),
            kind,
        };
        self.column_mut(side).push(block);
        id
    }

    /// Insert a block at an index, minting its id. The index is clamped
    /// to the column length.
    pub fn insert_block(&mut self, side: ColumnSide, index: usize, kind: BlockKind) -> BlockId {
        let id = self.ids.next_id();
        let block = ContentBlock {
            id: id.clone(),
            kind,
        };
        let column = self.column_mut(side);
        let index = index.min(column.len());
        column.insert(index, block);
        id
    }

    pub fn find_block(&self, id: &BlockId) -> Option<(ColumnSide, &ContentBlock)> {
        if let Some(block) = self.left.iter().find(|b| &b.id == id) {
            return Some((ColumnSide::Left, block));
        }
        self.right
            .iter()
            .find(|b| &b.id == id)
            .map(|b| (ColumnSide::Right, b))
    }

    pub fn find_block_mut(&mut self, id: &BlockId) -> Option<&mut ContentBlock> {
        if let Some(pos) = self.left.iter().position(|b| &b.id == id) {
            return Some(&mut self.left[pos]);
        }
        if let Some(pos) = self.right.iter().position(|b| &b.id == id) {
            return Some(&mut self.right[pos]);
        }
        None
    }

    /// Remove a block from whichever column holds it.
    pub fn remove_block(&mut self, id: &BlockId) -> Option<ContentBlock> {
        if let Some(pos) = self.left.iter().position(|b| &b.id == id) {
            return Some(self.left.remove(pos));
        }
        if let Some(pos) = self.right.iter().position(|b| &b.id == id) {
            return Some(self.right.remove(pos));
        }
        None
    }

    /// All blocks, left column first.
    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.left.iter().chain(self.right.iter())
    }
}

/// The `{html, css, js}` triple produced by the markup generator.
///
/// Wholly derived; recomputed on every document mutation and persisted
/// as the moment's saved representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub html: String,
    pub css: String,
    pub js: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut doc = MomentDocument::new(Layout::Equal);
        let a = doc.add_block(
            ColumnSide::Left,
            BlockKind::Instruction {
                text: "Lee".to_string(),
            },
        );
        let b = doc.add_block(
            ColumnSide::Right,
            BlockKind::Instruction {
                text: "Escucha".to_string(),
            },
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_find_and_remove() {
        let mut doc = MomentDocument::new(Layout::Equal);
        let id = doc.add_block(
            ColumnSide::Right,
            BlockKind::Button {
                label: "Continuar".to_string(),
            },
        );

        let (side, _) = doc.find_block(&id).unwrap();
        assert_eq!(side, ColumnSide::Right);

        let removed = doc.remove_block(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(doc.find_block(&id).is_none());
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut doc = MomentDocument::new(Layout::Equal);
        doc.insert_block(
            ColumnSide::Left,
            99,
            BlockKind::Instruction {
                text: "x".to_string(),
            },
        );
        assert_eq!(doc.left.len(), 1);
    }
}
