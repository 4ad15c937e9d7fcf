#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("`{operation}` is not implemented")]
    Unimplemented { operation: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
