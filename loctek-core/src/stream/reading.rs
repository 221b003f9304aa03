//! Pending and published height tracking

/// Last computed height and last published height
///
/// A computed height becomes publishable only when it is non-zero and
/// differs from what was last published. Zero doubles as "nothing decoded
/// yet", so a genuine reading of 0 is never published.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeightReading {
    pending: f32,
    last_published: Option<f32>,
}

impl HeightReading {
    /// Create an empty reading
    pub const fn new() -> Self {
        Self {
            pending: 0.0,
            last_published: None,
        }
    }

    /// Most recently computed height (0 if none yet)
    pub fn pending(&self) -> f32 {
        self.pending
    }

    /// Most recently published height
    pub fn last_published(&self) -> Option<f32> {
        self.last_published
    }

    /// Record a newly computed height
    pub fn set_pending(&mut self, height: f32) {
        self.pending = height;
    }

    /// Check whether the pending height should be published
    pub fn is_publishable(&self) -> bool {
        self.pending != 0.0 && self.last_published != Some(self.pending)
    }

    /// Mark the pending height as published and return it, if publishable
    pub fn take_publishable(&mut self) -> Option<f32> {
        if !self.is_publishable() {
            return None;
        }
        self.last_published = Some(self.pending);
        Some(self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reading_not_publishable() {
        let mut reading = HeightReading::new();
        assert!(!reading.is_publishable());
        assert_eq!(reading.take_publishable(), None);
    }

    #[test]
    fn test_publish_once_per_change() {
        let mut reading = HeightReading::new();
        reading.set_pending(72.5);
        assert_eq!(reading.take_publishable(), Some(72.5));
        assert_eq!(reading.take_publishable(), None);

        reading.set_pending(72.5);
        assert_eq!(reading.take_publishable(), None);

        reading.set_pending(73.0);
        assert_eq!(reading.take_publishable(), Some(73.0));
        assert_eq!(reading.last_published(), Some(73.0));
    }

    #[test]
    fn test_zero_is_never_published() {
        // Known quirk: zero means "no reading yet", even if the desk shows 0
        let mut reading = HeightReading::new();
        reading.set_pending(72.5);
        reading.take_publishable();
        reading.set_pending(0.0);
        assert_eq!(reading.take_publishable(), None);
        assert_eq!(reading.last_published(), Some(72.5));
    }

    #[test]
    fn test_return_to_previous_value_after_change() {
        let mut reading = HeightReading::new();
        reading.set_pending(70.0);
        reading.take_publishable();
        reading.set_pending(71.0);
        reading.take_publishable();
        reading.set_pending(70.0);
        assert_eq!(reading.take_publishable(), Some(70.0));
    }
}
