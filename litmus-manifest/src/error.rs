use std::{ops::Range, path::PathBuf};

use litmus_schema::SchemaError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for litmus-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Convert a byte range from `toml::Spanned` into a miette span.
///
/// Empty ranges carry no location and map to `None`.
pub(crate) fn span_of(range: Range<usize>) -> Option<SourceSpan> {
    if range.is_empty() {
        None
    } else {
        Some((range.start, range.end - range.start).into())
    }
}

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for a declaration that reuses a built-in scalar name.
    pub fn builtin_shadowed_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::BuiltinShadowed {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an unknown type error.
    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a litmus.toml declaring [enums] and [inputs] types"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse litmus.toml")]
    #[diagnostic(code(litmus::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(litmus::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(litmus::invalid_name),
        help("{reason}. Names use letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("'{name}' is a built-in scalar")]
    #[diagnostic(
        code(litmus::builtin_shadowed),
        help("built-in scalars (Int, Float, String, Boolean, ID) are always available; pick another name")
    )]
    BuiltinShadowed {
        #[source_code]
        src: NamedSource<String>,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("type '{name}' is declared as both an enum and an input")]
    #[diagnostic(code(litmus::duplicate_type))]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared as an enum here")]
        first_span: Option<SourceSpan>,
        #[label("declared again as an input")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("unknown type '{name}' in {context}")]
    #[diagnostic(
        code(litmus::unknown_type),
        help("declare '{name}' under [enums] or [inputs], or use a built-in scalar")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("duplicate value '{value}' in enum '{enum_name}'")]
    #[diagnostic(code(litmus::duplicate_enum_value))]
    DuplicateEnumValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: Option<SourceSpan>,
        #[label("listed again here")]
        second_span: Option<SourceSpan>,
        value: String,
        enum_name: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),
}
