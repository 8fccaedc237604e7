#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::utils::Float;
use std::fmt;

/// A type alias for result type with [`InstanceError`].
pub type InstanceResult<T> = Result<T, InstanceError>;

/// An error which aborts instance construction.
#[derive(Clone, Debug, PartialEq)]
pub enum InstanceError {
    /// Input source cannot be opened or read.
    FileOpen {
        /// A path (or source description).
        path: String,
        /// An underlying reason.
        reason: String,
    },

    /// Input does not follow the expected structure.
    Format(FormatError),

    /// Distances or demands are of very small or large scale.
    Scale(ScaleError),
}

/// Distinguishes error kinds without their context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// See [`InstanceError::FileOpen`].
    FileOpen,
    /// See [`InstanceError::Format`].
    Format,
    /// See [`InstanceError::Scale`].
    Scale,
}

/// Specifies a structural mismatch in the input.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatError {
    /// A token other than expected one is found.
    UnexpectedToken {
        /// An actual token.
        token: String,
        /// An expected token, if only one is acceptable at this position.
        expected: Option<String>,
    },

    /// A required header field was not provided.
    MissingField {
        /// A field name.
        field: String,
    },

    /// A token cannot be interpreted as a value of the field.
    InvalidValue {
        /// A field name.
        field: String,
        /// An actual token.
        token: String,
    },

    /// Input ends prematurely.
    UnexpectedEof {
        /// What was expected at this position.
        expected: String,
    },
}

/// A quantity checked by numerical safeguards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScaleQuantity {
    /// Max travel time.
    Distance,
    /// Max box demand.
    DemandBox,
    /// Max weight demand.
    DemandWeight,
}

/// Specifies a value out of accepted numerical range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleError {
    /// A checked quantity.
    pub quantity: ScaleQuantity,
    /// An actual value.
    pub value: Float,
}

impl InstanceError {
    /// Returns error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstanceError::FileOpen { .. } => ErrorKind::FileOpen,
            InstanceError::Format(_) => ErrorKind::Format,
            InstanceError::Scale(_) => ErrorKind::Scale,
        }
    }

    /// Creates an error for unexpected token.
    pub fn unexpected_token(token: &str, expected: Option<&str>) -> Self {
        FormatError::UnexpectedToken { token: token.to_string(), expected: expected.map(|e| e.to_string()) }.into()
    }

    /// Creates an error for missing header field.
    pub fn missing_field(field: &str) -> Self {
        FormatError::MissingField { field: field.to_string() }.into()
    }

    /// Creates an error for a token which cannot be used as field's value.
    pub fn invalid_value(field: &str, token: &str) -> Self {
        FormatError::InvalidValue { field: field.to_string(), token: token.to_string() }.into()
    }

    /// Creates an error for premature end of input.
    pub fn unexpected_eof(expected: &str) -> Self {
        FormatError::UnexpectedEof { expected: expected.to_string() }.into()
    }
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::FileOpen { path, reason } => {
                write!(f, "impossible to open instance file '{path}': {reason}")
            }
            InstanceError::Format(err) => write!(f, "{err}"),
            InstanceError::Scale(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnexpectedToken { token, expected: Some(expected) } => {
                write!(f, "unexpected data in input file: '{token}', expecting '{expected}'")
            }
            FormatError::UnexpectedToken { token, expected: None } => {
                write!(f, "unexpected data in input file: '{token}'")
            }
            FormatError::MissingField { field } => write!(f, "{field} is undefined"),
            FormatError::InvalidValue { field, token } => write!(f, "cannot parse {field}: '{token}'"),
            FormatError::UnexpectedEof { expected } => write!(f, "unexpected end of input, expecting {expected}"),
        }
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.quantity {
            ScaleQuantity::Distance => "distances",
            ScaleQuantity::DemandBox => "demand quantities (box)",
            ScaleQuantity::DemandWeight => "demand quantities (weight)",
        };

        write!(
            f,
            "the {name} are of very small or large scale (max value: {}). This could impact numerical stability, \
             please rescale the dataset and run again",
            self.value
        )
    }
}

impl std::error::Error for InstanceError {}

impl From<FormatError> for InstanceError {
    fn from(err: FormatError) -> Self {
        InstanceError::Format(err)
    }
}

impl From<ScaleError> for InstanceError {
    fn from(err: ScaleError) -> Self {
        InstanceError::Scale(err)
    }
}

/// A path placeholder used when an input source has no path.
pub const UNKNOWN_INPUT_PATH: &str = "<input>";

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::InvalidData => FormatError::InvalidValue {
                field: "input".to_string(),
                token: err.to_string(),
            }
            .into(),
            _ => InstanceError::FileOpen { path: UNKNOWN_INPUT_PATH.to_string(), reason: err.to_string() },
        }
    }
}
