#[derive(Debug, thiserror::Error)]
pub(super) enum Error {
    #[error("{0}")]
    Close(&'static str),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
