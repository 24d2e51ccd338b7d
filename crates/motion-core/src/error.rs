use thiserror::Error;

/// Construction-time failures. Runtime evaluation never fails; see the
/// individual modules for their fail-safe fallbacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("section list is empty")]
    EmptySectionList,
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),
    #[error("unknown section id `{0}`")]
    UnknownSection(String),
    #[error("invalid spring parameters (stiffness={stiffness}, damping={damping}, mass={mass})")]
    InvalidSpring {
        stiffness: f32,
        damping: f32,
        mass: f32,
    },
}
