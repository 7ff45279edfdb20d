use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Record source error: {message}")]
    Source { message: String },

    #[error("Warehouse sink error: {message}")]
    Sink { message: String },
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
