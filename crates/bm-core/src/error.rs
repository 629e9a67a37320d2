use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),
    #[error("viewport {width}x{height} is empty")]
    EmptyViewport { width: u32, height: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
