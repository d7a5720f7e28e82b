use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    InvalidDate,
    DateParse,
    ConfigParse,
    IOError(io::Error),
}

impl ErrorKind {
    fn describe(&self) -> String {
        match self {
            ErrorKind::InvalidDate => "invalid date".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::ConfigParse => "invalid config file".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

/// Failure of a date, parsing or config operation, with optional context.
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error::from(kind).with_msg(msg)
    }

    pub fn with_msg(self, message: &str) -> Self {
        Error {
            message: Some(message.to_owned()),
            ..self
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        ErrorKind::IOError(io_error).into()
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl<E: fmt::Debug> From<nom::Err<E>> for Error {
    fn from(error: nom::Err<E>) -> Self {
        Error::new(
            ErrorKind::DateParse,
            &format!("expected YYYY-MM-DD: {}", error),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.describe())?;
        if let Some(msg) = &self.message {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_with_and_without_message() {
        let bare = Error::from(ErrorKind::InvalidDate);
        assert_eq!(bare.to_string(), "invalid date");

        let detailed = bare.with_msg("month 13 out of range");
        assert_eq!(detailed.to_string(), "invalid date: month 13 out of range");
    }

    #[test]
    fn io_error_is_the_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "no such file"))
            .with_msg("cannot read 'moncal.toml'");

        assert_eq!(err.to_string(), "no such file: cannot read 'moncal.toml'");
        assert!(err.source().is_some());
        assert!(Error::from(ErrorKind::DateParse).source().is_none());
    }

    #[test]
    fn nom_failure_becomes_date_parse() {
        let failure: nom::Err<nom::error::Error<&str>> = nom::Err::Error(
            nom::error::Error::new("x", nom::error::ErrorKind::Char),
        );
        let err = Error::from(failure);

        assert!(matches!(err.kind, ErrorKind::DateParse));
        assert!(err.to_string().starts_with("invalid date format: expected YYYY-MM-DD"));
    }
}
