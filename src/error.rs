//! General error types
//!
//! Every failure raised while converting between host values and tagged data
//! is a [`CastError`]: a [`CastErrorKind`] describing what went wrong, plus the
//! structural path from the conversion root to the node at fault. The path is
//! attached by the codec engine as the error unwinds, exactly once, by the
//! innermost frame that observes it.
//!
//! Errors are never recovered from within the engine; they are caller-input
//! or schema-consistency defects and are propagated immediately.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sub-classification of failures to resolve an enum variant, whether by name
/// (when encoding) or by tag (when decoding).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum VariantError {
    /// Keyed structure named a variant the enum does not declare
    UnknownName { name: String, expected: Vec<String> },
    /// Constructor tag does not index any declared variant
    TagOutOfRange { tag: u64, count: usize },
    /// Keyed structure for an enum value did not hold exactly one key
    NotSingleKey { keys: usize },
}

impl Display for VariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantError::UnknownName { name, expected } => {
                write!(
                    f,
                    "invalid variant {} (expected: {})",
                    name,
                    expected.join(", ")
                )
            }
            VariantError::TagOutOfRange { tag, count } => {
                write!(f, "tag {tag} out of range (valid tags are 0..{count})")
            }
            VariantError::NotSingleKey { keys } => {
                write!(
                    f,
                    "enum value must be a record with exactly one key naming the variant, found {keys} keys"
                )
            }
        }
    }
}

impl Error for VariantError {}

/// Rejected hex string passed where a hash or address was expected; each
/// case keeps the offending input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexConvError {
    /// Digit count not a multiple of two
    OddParity(String),
    /// Contains something other than `[0-9a-fA-F]`, sign prefixes included
    NonHex(String),
}

impl Display for HexConvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OddParity(src) => {
                write!(f, "hex string of {} digits does not encode whole bytes", src.len())
            }
            Self::NonHex(_) => f.write_str("hex string holds a character outside [0-9a-fA-F]"),
        }
    }
}

impl Error for HexConvError {}

/// Enumeration over the classes of failure that the codec engine and the
/// primitive codecs it dispatches to may report.
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum CastErrorKind {
    /// Schema names a primitive with no registered codec
    UnknownPrimitive { name: String },
    /// Tagged data (or host value) is not of the shape the schema requires
    /// at this node
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Disagreement between a declared and an actual element or field count
    ArityMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
    /// Required struct field absent from the host value or from map-format
    /// tagged data
    MissingField { field: String },
    /// Enum variant could not be resolved
    InvalidVariant(VariantError),
    /// Primitive whose tagged form cannot be converted back into a host value
    LossyPrimitive { name: String },
    /// Reference node whose id was not registered on the current traversal
    UnresolvedReference { id: String },
    /// Domain-level validation failure reported by a primitive codec
    InvalidPrimitive { name: String, reason: String },
}

impl Display for CastErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CastErrorKind::UnknownPrimitive { name } => {
                write!(f, "conversion not yet implemented for primitive {name}")
            }
            CastErrorKind::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            CastErrorKind::ArityMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "expected {expected} {what}, got {actual}")
            }
            CastErrorKind::MissingField { field } => write!(f, "missing field {field}"),
            CastErrorKind::InvalidVariant(err) => Display::fmt(err, f),
            CastErrorKind::LossyPrimitive { name } => {
                write!(
                    f,
                    "can't convert tagged data back into {name} (significant loss of information)"
                )
            }
            CastErrorKind::UnresolvedReference { id } => {
                write!(f, "reference to undefined type {id}")
            }
            CastErrorKind::InvalidPrimitive { name, reason } => {
                write!(f, "invalid {name}: {reason}")
            }
        }
    }
}

impl Error for CastErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CastErrorKind::InvalidVariant(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VariantError> for CastErrorKind {
    fn from(err: VariantError) -> Self {
        Self::InvalidVariant(err)
    }
}

/// Failure of a single encode or decode call.
///
/// The structural path is `None` until the error is first annotated, after
/// which it is never overwritten; see [`CastError::with_path`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CastError {
    kind: CastErrorKind,
    path: Option<String>,
}

impl CastError {
    #[must_use]
    pub fn new(kind: CastErrorKind) -> Self {
        Self { kind, path: None }
    }

    #[must_use]
    pub fn shape(expected: &'static str, found: &'static str) -> Self {
        Self::new(CastErrorKind::ShapeMismatch { expected, found })
    }

    #[must_use]
    pub fn arity(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(CastErrorKind::ArityMismatch {
            what: what.into(),
            expected,
            actual,
        })
    }

    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(CastErrorKind::MissingField {
            field: field.into(),
        })
    }

    #[must_use]
    pub fn invalid_primitive(name: impl Into<String>, reason: impl Display) -> Self {
        Self::new(CastErrorKind::InvalidPrimitive {
            name: name.into(),
            reason: reason.to_string(),
        })
    }

    pub fn kind(&self) -> &CastErrorKind {
        &self.kind
    }

    /// Returns the structural path of the failing node, if one was attached
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Attaches `path` unless a path has already been attached, in which case
    /// `self` is returned unchanged.
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        self.annotate(|| path.into())
    }

    /// Lazily-rendered variant of [`with_path`](Self::with_path); `render` is
    /// only invoked when no path is attached yet.
    pub(crate) fn annotate(mut self, render: impl FnOnce() -> String) -> Self {
        if self.path.is_none() {
            let path = render();
            log::debug!("cast failed at `{}`: {}", path, self.kind);
            self.path = Some(path);
        }
        self
    }
}

impl From<CastErrorKind> for CastError {
    fn from(kind: CastErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<VariantError> for CastError {
    fn from(err: VariantError) -> Self {
        Self::new(err.into())
    }
}

impl Display for CastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)?;
        match &self.path {
            Some(path) => write!(f, "\n ... at {path}"),
            None => Ok(()),
        }
    }
}

impl Error for CastError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.kind.source()
    }
}

/// Type alias for Result with an error type of [`CastError`]
pub type CastResult<T> = std::result::Result<T, CastError>;

#[cfg(test)]
mod test {
    use super::*;

    fn dummy<T: Send + Sync>() {}

    #[test]
    fn cast_error_threadsafe() {
        dummy::<CastError>()
    }

    #[test]
    fn path_is_attached_once() {
        let err = CastError::missing_field("owner")
            .with_path("[fStruct].inner")
            .with_path("outer");
        assert_eq!(err.path(), Some("[fStruct].inner"));
        assert_eq!(
            err.to_string(),
            "missing field owner\n ... at [fStruct].inner"
        );
    }

    #[test]
    fn annotate_skips_render_when_set() {
        let err = CastError::shape("list", "int").with_path("");
        let err = err.annotate(|| unreachable!("path already attached"));
        assert_eq!(err.path(), Some(""));
    }

    #[test]
    fn variant_error_is_source() {
        let err = CastError::from(VariantError::TagOutOfRange { tag: 3, count: 2 });
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "tag 3 out of range (valid tags are 0..2)");
    }

    #[test]
    fn hex_error_messages() {
        assert_eq!(
            HexConvError::OddParity("abc".into()).to_string(),
            "hex string of 3 digits does not encode whole bytes"
        );
        assert_eq!(
            HexConvError::NonHex("+a".into()).to_string(),
            "hex string holds a character outside [0-9a-fA-F]"
        );
    }
}
