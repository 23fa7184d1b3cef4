/// Why a store operation was answered without the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoReason {
    NotConnected,
    Timeout,
}

impl DemoReason {
    pub fn list_message(self) -> &'static str {
        match self {
            DemoReason::NotConnected => "Database not connected - running in demo mode",
            DemoReason::Timeout => "Database timeout - running in demo mode",
        }
    }

    pub fn create_message(self) -> &'static str {
        match self {
            DemoReason::NotConnected => "Demo mode - post not saved to database",
            DemoReason::Timeout => "Demo mode - post not saved due to database timeout",
        }
    }
}

/// Result of a store operation that degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome<T> {
    /// Served by the database.
    Stored(T),
    /// Served without the database; `data` is empty or a stand-in.
    Demo { data: T, reason: DemoReason },
}

impl<T> StoreOutcome<T> {
    pub fn data(&self) -> &T {
        match self {
            StoreOutcome::Stored(data) | StoreOutcome::Demo { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            StoreOutcome::Stored(data) | StoreOutcome::Demo { data, .. } => data,
        }
    }

    pub fn demo_reason(&self) -> Option<DemoReason> {
        match self {
            StoreOutcome::Stored(_) => None,
            StoreOutcome::Demo { reason, .. } => Some(*reason),
        }
    }
}
