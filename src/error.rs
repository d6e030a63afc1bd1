use thiserror::Error;

/// Error types for call center engine operations
///
/// This enum covers the error conditions that can occur while managing the
/// agent registry and assigning calls, from failed reassignments to
/// configuration validation problems.
///
/// Note that an empty eligible set is *not* an error: the assignment
/// operations signal it by returning `None`, and callers are expected to
/// branch on absence (for example by leaving the call unassigned).
///
/// # Examples
///
/// ```
/// use callcenter_engine::{CallCenterError, Result};
///
/// fn pick_target() -> Result<()> {
///     Err(CallCenterError::target_unavailable("Target agent is not available for assignment"))
/// }
///
/// match pick_target() {
///     Ok(_) => println!("Reassignment accepted"),
///     Err(CallCenterError::TargetUnavailable(msg)) => println!("Rejected: {}", msg),
///     Err(e) => println!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum CallCenterError {
    /// Agent-related errors
    ///
    /// Covers problems with agent registration and agent state management,
    /// such as seeding the roster with a duplicate agent id.
    #[error("Agent error: {0}")]
    Agent(String),

    /// Call routing errors
    ///
    /// Problems inside the assignment policies themselves, as opposed to a
    /// legitimately empty eligible set.
    #[error("Routing error: {0}")]
    Routing(String),

    /// Reassignment target rejected
    ///
    /// Returned by `reassign` when the requested target agent is missing,
    /// marked unavailable, or already at capacity. The reassignment is
    /// guaranteed not to have mutated any agent when this is returned.
    #[error("Target unavailable: {0}")]
    TargetUnavailable(String),

    /// Resource not found errors
    ///
    /// A referenced agent could not be located in the registry, in a
    /// context where that is not tolerated as a no-op.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration validation and parsing errors
    ///
    /// Invalid values, missing required settings, or a configuration file
    /// that could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input validation errors
    ///
    /// Caller-provided input failed validation, for example an empty
    /// agent id.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal system errors
    ///
    /// Unexpected internal errors that indicate a bug, such as the
    /// id-to-index map disagreeing with the roster.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CallCenterError {
    /// Create a new Agent error with the provided message
    ///
    /// # Examples
    ///
    /// ```
    /// use callcenter_engine::CallCenterError;
    ///
    /// let error = CallCenterError::agent("Duplicate agent id: alice");
    /// println!("{}", error);  // Prints: Agent error: Duplicate agent id: alice
    /// ```
    pub fn agent<S: Into<String>>(msg: S) -> Self {
        Self::Agent(msg.into())
    }

    /// Create a new Routing error with the provided message
    pub fn routing<S: Into<String>>(msg: S) -> Self {
        Self::Routing(msg.into())
    }

    /// Create a new TargetUnavailable error with the provided message
    ///
    /// # Examples
    ///
    /// ```
    /// use callcenter_engine::CallCenterError;
    ///
    /// let error = CallCenterError::target_unavailable("Agent diana is at capacity (8/8)");
    /// println!("{}", error);
    /// ```
    pub fn target_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::TargetUnavailable(msg.into())
    }

    /// Create a new NotFound error with the provided message
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Configuration error with the provided message
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new InvalidInput error with the provided message
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Internal error with the provided message
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convenient Result type for call center operations
pub type Result<T> = std::result::Result<T, CallCenterError>;
