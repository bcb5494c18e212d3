use crate::modules::time_logs::core::interval::ActivityInterval;

pub struct IntervalBuilder {
    inner: ActivityInterval,
}

impl Default for IntervalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IntervalBuilder {
    pub fn new() -> Self {
        Self {
            inner: ActivityInterval {
                activity_name: "Deep Work".to_string(),
                start_time: "2024-01-15T09:00:00".to_string(),
                end_time: Some("2024-01-15T10:00:00".to_string()),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn start(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = v.into();
        self
    }

    pub fn end(mut self, v: impl Into<String>) -> Self {
        self.inner.end_time = Some(v.into());
        self
    }

    /// Still-running record: no end timestamp.
    pub fn open(mut self) -> Self {
        self.inner.end_time = None;
        self
    }

    pub fn build(self) -> ActivityInterval {
        self.inner
    }
}
