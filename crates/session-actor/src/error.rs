//! # Framework Errors
//!
//! Errors raised by the session runtime itself. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] so a domain client can downcast them
//! back to its own error type.

/// Errors that can occur within the session runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Session actor closed")]
    ActorClosed,
    #[error("Session actor dropped response channel")]
    ActorDropped,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Session ids exhausted")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type, if that is what this wraps.
    ///
    /// Returns the original error unchanged when it is a transport failure or a
    /// different entity error type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("cart is empty")]
    struct EmptyCart;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(EmptyCart));
        assert_eq!(err.into_entity_error::<EmptyCart>().unwrap(), EmptyCart);
    }

    #[test]
    fn test_foreign_errors_are_returned_untouched() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<EmptyCart>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed.into_entity_error::<EmptyCart>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
