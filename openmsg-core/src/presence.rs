//! Field presence

use serde::{Deserialize, Serialize};

/// Schema-level presence of a field.
///
/// Only [`Presence::Optional`] gives the null sentinel its "unset" meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Always carries a value
    #[default]
    Required,
    /// May carry the null sentinel
    Optional,
    /// Fixed by the schema
    Constant,
}

impl Presence {
    /// Check for [`Presence::Optional`]
    pub const fn is_optional(self) -> bool {
        matches!(self, Presence::Optional)
    }
}
