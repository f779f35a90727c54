use crate::errors::DListError;

/// Construction parameters for a [`DLinkedList`](crate::DLinkedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    hint: usize,
    max_hint: usize,
}

impl ListConfig {
    /// Largest hint accepted unless overridden (the signed 32-bit ceiling).
    pub const DEFAULT_MAX_HINT: usize = i32::MAX as usize;

    /// Pre-allocate `hint` empty nodes.
    pub fn new(hint: usize) -> Self {
        Self {
            hint,
            max_hint: Self::DEFAULT_MAX_HINT,
        }
    }

    #[inline]
    pub fn with_hint(mut self, hint: usize) -> Self {
        self.hint = hint;
        self
    }

    /// Reject hints above `max_hint` at construction.
    #[inline]
    pub fn with_max_hint(mut self, max_hint: usize) -> Self {
        self.max_hint = max_hint;
        self
    }

    #[inline]
    pub fn hint(&self) -> usize {
        self.hint
    }

    #[inline]
    pub fn max_hint(&self) -> usize {
        self.max_hint
    }

    pub(crate) fn validate(&self) -> Result<(), DListError> {
        if self.hint > self.max_hint {
            return Err(DListError::InvalidArgument {
                reason: "capacity hint exceeds the configured ceiling",
            });
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_validation() {
        let cfg = ListConfig::default();
        assert_eq!(cfg.hint(), 0);
        assert_eq!(cfg.max_hint(), ListConfig::DEFAULT_MAX_HINT);
        assert!(cfg.validate().is_ok());

        let cfg = ListConfig::new(8).with_max_hint(4);
        assert!(matches!(
            cfg.validate(),
            Err(DListError::InvalidArgument { .. })
        ));

        let cfg = cfg.with_hint(4);
        assert!(cfg.validate().is_ok());
    }
}
