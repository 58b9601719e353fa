//! Block registry for block discovery and dispatch
//!
//! This module provides an ordered registry of block formatters. Unlike a
//! name-keyed map, order matters here: when several blocks could claim a
//! line, the one registered first wins.

use crate::blocks::{
    CommentBlock, DefinitionListBlock, HeadingBlock, HorizontalRuleBlock, ListBlock,
    ParagraphBlock, PreformattedBlock, TableBlock,
};
use crate::error::FormatError;
use crate::format::BlockFormatter;

/// Registry of block formatters in priority order
///
/// # Examples
///
/// ```ignore
/// let mut registry = BlockRegistry::new();
/// registry.register(HeadingBlock);
///
/// let block = registry.get("heading")?;
/// assert!(block.can_handle(&["! Title"], 0));
/// ```
pub struct BlockRegistry {
    blocks: Vec<Box<dyn BlockFormatter>>,
}

impl BlockRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BlockRegistry { blocks: Vec::new() }
    }

    /// Register a block formatter
    ///
    /// A new block is appended with the lowest priority. If a block with the
    /// same name already exists, it is replaced in place and keeps its
    /// priority.
    pub fn register<B: BlockFormatter + 'static>(&mut self, block: B) {
        match self.position(block.name()) {
            Some(pos) => self.blocks[pos] = Box::new(block),
            None => self.blocks.push(Box::new(block)),
        }
    }

    /// Get a block formatter by name
    pub fn get(&self, name: &str) -> Result<&dyn BlockFormatter, FormatError> {
        self.position(name)
            .map(|pos| self.blocks[pos].as_ref())
            .ok_or_else(|| FormatError::BlockNotFound(name.to_string()))
    }

    /// Check if a block formatter exists
    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// List block names in priority order
    pub fn list_blocks(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.name().to_string()).collect()
    }

    /// Iterate over the registered blocks in priority order
    pub fn iter(&self) -> impl Iterator<Item = &dyn BlockFormatter> {
        self.blocks.iter().map(|b| b.as_ref())
    }

    /// First block that claims the line at `index`
    pub fn find(&self, lines: &[&str], index: usize) -> Option<&dyn BlockFormatter> {
        self.iter().find(|block| block.can_handle(lines, index))
    }

    /// Create a registry with the built-in blocks
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(HeadingBlock);
        registry.register(ListBlock);
        registry.register(DefinitionListBlock);
        registry.register(TableBlock);
        registry.register(CommentBlock);
        registry.register(HorizontalRuleBlock);
        registry.register(PreformattedBlock);
        registry.register(ParagraphBlock);

        registry
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.name() == name)
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
