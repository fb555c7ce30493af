use crate::model::BlockId;

/// Importer-local id generator.
///
/// Ids look like `heading-3`: a type prefix for debuggability plus a
/// counter shared across all prefixes within one import run. The value
/// carries no meaning beyond uniqueness. Owned by a single call frame,
/// never module-level state, so imports stay referentially transparent
/// across calls.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self, prefix: &str) -> BlockId {
        let n = self.next;
        self.next += 1;
        format!("{prefix}-{n}")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
