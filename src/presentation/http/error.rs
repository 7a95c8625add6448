use serde::{Serialize, Serializer};

/// Client-facing error bodies. None of them carry internal details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    MissingParameter(String),
    InvalidParameter(String),
    Unauthorized,
    ServerError,
}

impl HttpError {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    pub fn invalid_parameter(name: impl Into<String>) -> Self {
        Self::InvalidParameter(name.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MissingParamError",
            Self::InvalidParameter(_) => "InvalidParamError",
            Self::Unauthorized => "UnauthorizedError",
            Self::ServerError => "ServerError",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingParameter(name) => format!("Missing param: {name}"),
            Self::InvalidParameter(name) => format!("Invalid param: {name}"),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::ServerError => "Internal error".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorBody {
            error: self.kind(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
