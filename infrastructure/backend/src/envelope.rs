use serde::Deserialize;

use business::domain::errors::GatewayError;

/// Uniform backend response wrapper. `code == 200` means success; anything
/// else rejects the operation with the envelope's message as error text.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<Option<T>, GatewayError> {
        if self.code == 200 {
            Ok(self.data)
        } else {
            Err(GatewayError::backend(
                self.message
                    .unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}
