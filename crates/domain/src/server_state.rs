use std::fmt;

/// `NotStarted -> Running -> Stopped`. There is no way back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerLifecycleState {
    NotStarted,
    Running,
    Stopped,
}

impl ServerLifecycleState {
    pub fn is_running(self) -> bool {
        self == ServerLifecycleState::Running
    }
}

impl fmt::Display for ServerLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServerLifecycleState::NotStarted => "not_started",
            ServerLifecycleState::Running => "running",
            ServerLifecycleState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}
