/// Nesting limit applied when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How a [`crate::NoteArray`] fills its members while being read.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ChildrenMode {
    /// Read into the members the array already holds, in their current order.
    /// Each member's type must match the record found at its position.
    #[default]
    Replay,

    /// Drop the members the array holds, and construct each member anew
    /// from the type tag found in the buffer.
    Materialize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReadConfig {
    pub children: ChildrenMode,

    /// The maximum count of [`crate::NoteArray`]s nested inside each other, the outermost included,
    /// when members are materialized. Replayed reads go only as deep as the target tree does.
    pub max_depth: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            children: ChildrenMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReadConfig {
    pub fn materialize() -> Self {
        Self {
            children: ChildrenMode::Materialize,
            ..Self::default()
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}
