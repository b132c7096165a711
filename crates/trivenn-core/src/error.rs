use crate::overlap::SetKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "a Venn diagram needs 3 distinct {kind} labels, found {found}; add more rows and try again"
    )]
    NotEnoughSets { kind: SetKind, found: usize },
}
