use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("Priority queue is empty.")]
    EmptyContainer,
}
