use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bildfel: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO-fel: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nativ splash: {0}")]
    NativeSplash(String),

    #[error("Konfigurationsfel: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn native_splash(msg: impl Into<String>) -> Self {
        Self::NativeSplash(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
