use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for AVTransport operations
///
/// The three variants keep "device unreachable or refusing" apart from
/// "device answered with something we cannot understand" and from
/// "caller handed us something we cannot embed".
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport error
    ///
    /// The action was not accepted: connection refused, timeout, non-2xx
    /// status, or a UPnP fault returned by the renderer.
    #[error("Transport error: {0}")]
    Transport(#[from] SoapError),

    /// Malformed response
    ///
    /// The renderer replied, but the body is not parseable XML, lacks the
    /// expected `<Action>Response` element, or carries a value outside the
    /// protocol's closed set.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid caller input
    ///
    /// A value supplied by the caller cannot be safely embedded in a SOAP
    /// envelope, such as a raw metadata blob with unescaped markup.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Whether the renderer could not be reached or rejected the action
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Whether the renderer replied with a body that violates the protocol
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, ApiError::MalformedResponse(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
