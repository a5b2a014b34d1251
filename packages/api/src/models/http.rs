use serde::{Deserialize, Serialize};

/// Message body the server attaches to success and error responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
