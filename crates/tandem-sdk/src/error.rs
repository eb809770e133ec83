//! Error types shared by host objects and the script bridge

/// Result type for bridge calls
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors raised while a script touches a host value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    /// The member is neither a property nor a method of the receiver.
    ///
    /// This is the default missing-member condition; the bridge raises it
    /// when it declines to intercept an access.
    #[error("undefined member `{member}` for {receiver}")]
    MemberNotFound {
        /// Display name of the receiver
        receiver: String,
        /// Member name as written by the caller
        member: String,
    },

    /// The value was invoked but has no call behavior
    #[error("{0} is not callable")]
    NotCallable(String),

    /// Type mismatch during conversion
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Invalid argument
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// Failure raised inside a host function
    #[error("{0}")]
    Host(String),
}

impl BridgeError {
    /// Build the default missing-member condition for `receiver.member`
    pub fn member_not_found(receiver: impl Into<String>, member: impl Into<String>) -> Self {
        BridgeError::MemberNotFound {
            receiver: receiver.into(),
            member: member.into(),
        }
    }

    /// True for the missing-member condition
    pub fn is_member_not_found(&self) -> bool {
        matches!(self, BridgeError::MemberNotFound { .. })
    }
}

impl From<String> for BridgeError {
    fn from(s: String) -> Self {
        BridgeError::Host(s)
    }
}

impl From<&str> for BridgeError {
    fn from(s: &str) -> Self {
        BridgeError::Host(s.to_string())
    }
}
