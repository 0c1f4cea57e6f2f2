use thiserror::Error;

/// Errors produced while compiling markup. All variants abort the compile;
/// there is no partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("malformed `{key}` attribute on <{element}>: expected {expected}")]
    MalformedDirectiveAttribute {
        key: String,
        element: String,
        expected: String,
    },

    #[error("line {line}: unknown directive form `{found}` (expected `hb` or `hb!`)")]
    UnknownDirectiveForm { line: usize, found: String },
}

impl CompileError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn malformed_attr(key: &str, element: &str, expected: &str) -> Self {
        Self::MalformedDirectiveAttribute {
            key: key.to_string(),
            element: element.to_string(),
            expected: expected.to_string(),
        }
    }
}
