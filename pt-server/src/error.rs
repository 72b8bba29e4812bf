use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Startup error: {message}")]
    Startup { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
