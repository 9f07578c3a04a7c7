use thiserror::Error;

/// Errors raised by catalog construction and id lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate property id '{0}'")]
    DuplicateId(String),

    #[error("no property with id '{0}'")]
    UnknownProperty(String),
}
