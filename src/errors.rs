/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DListError {
    /// The list could not be built from the given arguments.
    InvalidArgument { reason: &'static str },

    /// `index` does not name a position inside the logical window of `len` elements.
    OutOfRange { index: usize, len: usize },
}

impl DListError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        DListError::OutOfRange { index, len }
    }
}

impl core::fmt::Display for DListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DListError::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            DListError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl std::error::Error for DListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = DListError::out_of_range(4, 2);
        assert_eq!(e.to_string(), "index 4 out of range for list of length 2");

        let e = DListError::InvalidArgument {
            reason: "hint exceeds ceiling",
        };
        assert_eq!(e.to_string(), "invalid argument: hint exceeds ceiling");
    }
}
