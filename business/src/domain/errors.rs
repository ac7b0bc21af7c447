/// Gateway errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
/// `Backend` carries the message from the response envelope verbatim, since
/// the backend is the authority on what went wrong.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.decode")]
    Decode,
    #[error("gateway.backend: {0}")]
    Backend(String),
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn decode() -> Self {
        GatewayError::Decode
    }
    pub fn backend(message: impl Into<String>) -> Self {
        GatewayError::Backend(message.into())
    }
}
