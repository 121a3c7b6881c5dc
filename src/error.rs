use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("texture encode error: {0}")]
    TextureEncode(#[from] image::ImageError),

    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
