//! # Error reporting for reading of problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::transport::error::ModelError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a problem.
    ///
    /// This variant is only created for syntactically incorrect files; a syntactically valid
    /// description of an invalid problem is a `Model` error instead.
    Parse(ParseError),
    /// The parsed quantities don't describe a valid problem.
    Model(ModelError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => message.fmt(f),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Model(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Model(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<ModelError> for ImportError {
    fn from(error: ModelError) -> Self {
        ImportError::Model(error)
    }
}

/// A `ParseError` describes a syntax problem, located at a line when one is known.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    /// One-based line number and the offending line, when known.
    location: Option<(usize, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` located at a specific line.
    pub fn at_line(description: impl Into<String>, number: usize, line: &str) -> Self {
        Self {
            description: description.into(),
            location: Some((number, line.to_string())),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.location {
            Some((number, line)) => {
                write!(f, "{} at line {}: \"{}\"", self.description, number, line)
            }
            None => self.description.fmt(f),
        }
    }
}

impl Error for ParseError {
}
