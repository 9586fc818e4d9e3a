use chromaplot_core::ConfigError;

/// Errors that can occur while rendering or exporting a diagram.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid diagram config: {0}")]
    Config(#[from] ConfigError),
    #[error("overlay drawing failed: {0}")]
    Draw(String),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
