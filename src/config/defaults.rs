//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [load] Section Defaults
// ============================================================================

pub mod load {
    use crate::loader::Policy;

    pub fn policy() -> Policy {
        Policy::Lenient
    }
}

// ============================================================================
// [emit] Section Defaults
// ============================================================================

pub mod emit {
    use crate::loader::script::DEFAULT_VARIABLE;

    pub fn variable() -> String {
        DEFAULT_VARIABLE.into()
    }
}
