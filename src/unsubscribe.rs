/// Why an unsubscribe request failed.
#[derive(Debug, thiserror::Error)]
pub enum UnsubscribeError {
    #[error("unsubscribe of {id} was rejected with status {status}")]
    Rejected { id: String, status: u16 },
    #[error("transport failure: {0}")]
    Transport(String),
}

/// The delete/unsubscribe mutation.
///
/// Invoked from the left-swipe hook after the card has already left the deck; a failure is
/// logged and never rolls the deck back.
pub trait Unsubscriber: Send + Sync {
    fn unsubscribe(&self, id: &str) -> Result<(), UnsubscribeError>;
}

impl<F> Unsubscriber for F
where
    F: Fn(&str) -> Result<(), UnsubscribeError> + Send + Sync,
{
    fn unsubscribe(&self, id: &str) -> Result<(), UnsubscribeError> {
        self(id)
    }
}
