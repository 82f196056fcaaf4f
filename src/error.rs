/// Failures reported by the list operations.
///
/// A failed operation never leaves the list partially modified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("operation requires a non-empty list")]
    EmptyList,

    #[error("value not found in list")]
    NotFound,

    #[error("index {index} out of range for list of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, ListError>;
