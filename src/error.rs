use migration::RevisionError;
use sea_orm::DbErr;

pub type Result<T> = std::result::Result<T, Error>;

// Lower-cased fragments of Postgres and SQLite error messages.
const CONSTRAINT_VIOLATIONS: &[&str] = &[
    "contains null values",
    "violates not-null constraint",
    "not null constraint failed",
];
const SCHEMA_CONFLICTS: &[&str] = &[
    "already exists",
    "does not exist",
    "duplicate column name",
    "no such column",
    "no such table",
];

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    SchemaConflict(DbErr),
    ConstraintViolation(DbErr),
    Connection(DbErr),
    Database(DbErr),
    Config(config::ConfigError),
    Revision(RevisionError),
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::SchemaConflict(_) => "schema_conflict",
            ErrorKind::ConstraintViolation(_) => "constraint_violation",
            ErrorKind::Connection(_) => "connection",
            ErrorKind::Database(_) => "database",
            ErrorKind::Config(_) => "config",
            ErrorKind::Revision(_) => "revision",
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::SchemaConflict(e)
            | ErrorKind::ConstraintViolation(e)
            | ErrorKind::Connection(e)
            | ErrorKind::Database(e) => Some(e),
            ErrorKind::Config(e) => Some(e),
            ErrorKind::Revision(e) => Some(e),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorKind::SchemaConflict(_) => write!(f, "Schema conflict"),
            ErrorKind::ConstraintViolation(_) => write!(f, "Constraint violation"),
            ErrorKind::Connection(_) => write!(f, "Connection error"),
            ErrorKind::Database(_) => write!(f, "Database error"),
            ErrorKind::Config(_) => write!(f, "Config error"),
            ErrorKind::Revision(_) => write!(f, "Revision error"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        let msg = e.to_string();
        let lowered = msg.to_lowercase();

        let kind = match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => ErrorKind::Connection(e),
            _ if CONSTRAINT_VIOLATIONS.iter().any(|m| lowered.contains(m)) => {
                ErrorKind::ConstraintViolation(e)
            }
            _ if SCHEMA_CONFLICTS.iter().any(|m| lowered.contains(m)) => {
                ErrorKind::SchemaConflict(e)
            }
            _ => ErrorKind::Database(e),
        };

        Error { kind, message: msg }
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        let msg = e.to_string();
        Error {
            kind: ErrorKind::Config(e),
            message: msg,
        }
    }
}

impl From<RevisionError> for Error {
    fn from(e: RevisionError) -> Self {
        let msg = e.to_string();
        Error {
            kind: ErrorKind::Revision(e),
            message: msg,
        }
    }
}
