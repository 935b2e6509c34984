//! Internal helper macros.

/// Returns early with `$error` when `$predicate` doesn't hold.
///
/// Like `assert!`, but for conditions a caller can violate at runtime, so they are reported
/// as errors instead of panics.
///
/// ```ignore
/// ensure!(!self.response_started, SendError::ResponseStarted);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
