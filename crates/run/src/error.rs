/// Error type for the Runner module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The machine faulted, or the program could not be parsed
    #[error("Machine error: {0}")]
    Machine(#[from] intcode_vm::Error),

    /// A supplied input value is not a base-10 integer
    #[error("Invalid input: '{0}' is not a base-10 integer")]
    InvalidInput(String),

    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    /// Generic internal error that may occur while running
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
