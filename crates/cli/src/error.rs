#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Run error: {0}")]
    RunError(#[from] intcode_core::intcode_runner::Error),
    #[error("Disassemble error: {0}")]
    DisassembleError(#[from] intcode_core::intcode_disassembler::Error),
}
