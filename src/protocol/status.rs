//! Response status codes
//!
//! Two-byte outcome codes from the response header. The numeric values
//! are fixed by the wire protocol; note the gap between `AuthContinue`
//! (9) and `UnknownCommand` (129).

/// Outcome of the operation a response answers
///
/// Codes outside the known table map to [`Status::Unrecognized`] so the
/// mapping is total in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No error
    NoError,
    /// Key not found
    NotFound,
    /// Key exists
    Exists,
    /// Value too large
    TooLarge,
    /// Invalid arguments
    InvalidArguments,
    /// Item not stored
    NotStored,
    /// Incr/decr on a non-numeric value
    NonNumericValue,
    /// The vbucket belongs to another server
    InvalidVbucket,
    /// Authentication error
    AuthError,
    /// Authentication continue
    AuthContinue,
    /// Unknown command
    UnknownCommand,
    /// Out of memory
    OutOfMemory,
    /// Not supported
    NotSupported,
    /// Internal error
    InternalError,
    /// Busy
    Busy,
    /// Temporary failure
    TemporaryFailure,

    /// A code not present in the known table, preserved verbatim
    Unrecognized(u16),
}

impl Status {
    /// Map a wire code to its status (total; O(1) jump-table dispatch)
    pub fn from_code(code: u16) -> Status {
        match code {
            0 => Status::NoError,
            1 => Status::NotFound,
            2 => Status::Exists,
            3 => Status::TooLarge,
            4 => Status::InvalidArguments,
            5 => Status::NotStored,
            6 => Status::NonNumericValue,
            7 => Status::InvalidVbucket,
            8 => Status::AuthError,
            9 => Status::AuthContinue,
            129 => Status::UnknownCommand,
            130 => Status::OutOfMemory,
            131 => Status::NotSupported,
            132 => Status::InternalError,
            133 => Status::Busy,
            134 => Status::TemporaryFailure,
            other => Status::Unrecognized(other),
        }
    }

    /// The canonical wire code for this status
    pub fn code(self) -> u16 {
        match self {
            Status::NoError => 0,
            Status::NotFound => 1,
            Status::Exists => 2,
            Status::TooLarge => 3,
            Status::InvalidArguments => 4,
            Status::NotStored => 5,
            Status::NonNumericValue => 6,
            Status::InvalidVbucket => 7,
            Status::AuthError => 8,
            Status::AuthContinue => 9,
            Status::UnknownCommand => 129,
            Status::OutOfMemory => 130,
            Status::NotSupported => 131,
            Status::InternalError => 132,
            Status::Busy => 133,
            Status::TemporaryFailure => 134,
            Status::Unrecognized(code) => code,
        }
    }
}
