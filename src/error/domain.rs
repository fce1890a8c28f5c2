use thiserror::Error;

/// Violations of the message domain invariants.
///
/// Messages come in two shapes: originals (no original-message reference,
/// always in English) and translations (reference exactly one original).
/// These errors are raised by the service layer when a create or update
/// would break that structure and surface as 400 Bad Request responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An original message must be written in English.
    ///
    /// Raised when creating an original in another language or changing the
    /// language of an existing original.
    #[error("an original message must be written in English")]
    OriginalMessageNotInEnglish,

    /// An original message cannot be given an original-message reference.
    ///
    /// Raised when an update tries to turn an original into a translation.
    #[error("an original message cannot reference another message as its original")]
    OriginalMessageIsNotNull,

    /// A translation cannot have its original-message reference removed.
    ///
    /// Raised when an update tries to turn a translation into an original.
    #[error("a translation cannot be converted into an original message")]
    TranslationCannotBeConverted,

    /// The referenced message is itself a translation.
    ///
    /// Translations form a flat one-level structure: only an original may be
    /// the target of an original-message reference.
    #[error("message {0} is a translation and cannot be used as an original")]
    OriginalMessageIsNotOriginal(i32),
}
