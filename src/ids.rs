//! Todo Id Generation

use uuid::Uuid;

use crate::models::TodoId;

/// Source of fresh, collision-resistant todo ids
pub trait IdGenerator {
    fn generate_id(&mut self) -> TodoId;
}

/// Random v4 UUIDs, hyphenated lowercase
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&mut self) -> TodoId {
        TodoId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter ids ("1", "2", ...), for deterministic tests
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate_id(&mut self) -> TodoId {
        self.next += 1;
        TodoId::new(self.next.to_string())
    }
}
