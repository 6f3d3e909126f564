//! Reply tokens
//!
//! Every accepted command line yields exactly one reply. The only silent
//! case is line-buffer overflow, which produces no reply at all.

use core::fmt;

use crate::status::StatusReport;

/// Reply to one dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Command executed
    Done,
    /// Value outside the allowed domain, or malformed payload
    ArgsError,
    /// Unrecognized command, or a gated command while the machine is idle
    Unknown,
    /// Snapshot block for `status`
    Status(StatusReport),
}

impl Reply {
    /// Wire token for the simple replies (`Status` has no single token)
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Reply::Done => Some("done"),
            Reply::ArgsError => Some("args_error"),
            Reply::Unknown => Some("unknown"),
            Reply::Status(_) => None,
        }
    }
}

impl fmt::Display for Reply {
    /// Render the reply including terminating newline(s)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(report) => write!(f, "{}", report),
            simple => writeln!(f, "{}", simple.token().unwrap_or("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_tokens() {
        assert_eq!(Reply::Done.token(), Some("done"));
        assert_eq!(Reply::ArgsError.token(), Some("args_error"));
        assert_eq!(Reply::Unknown.token(), Some("unknown"));
        assert_eq!(Reply::Status(StatusReport::default()).token(), None);
    }

    #[test]
    fn test_simple_rendering() {
        let mut out = String::<16>::new();
        write!(out, "{}", Reply::Done).unwrap();
        assert_eq!(out.as_str(), "done\n");

        out.clear();
        write!(out, "{}", Reply::ArgsError).unwrap();
        assert_eq!(out.as_str(), "args_error\n");
    }

    #[test]
    fn test_status_rendering_delegates() {
        let mut report = StatusReport::default();
        report.mode = 1;
        let mut out = String::<512>::new();
        write!(out, "{}", Reply::Status(report)).unwrap();
        assert!(out.starts_with("mode=1\n"));
    }
}
