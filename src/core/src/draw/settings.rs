pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// A pot 1 team with a fixed, pre-assigned group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlacement {
    pub team_id: String,
    pub group: char,
}

impl HostPlacement {
    pub fn new(team_id: impl Into<String>, group: char) -> Self {
        HostPlacement {
            team_id: team_id.into(),
            group,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawSettings {
    pub max_attempts: usize,
    pub hosts: Vec<HostPlacement>,
}

impl DrawSettings {
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_hosts(mut self, hosts: Vec<HostPlacement>) -> Self {
        self.hosts = hosts;
        self
    }
}

impl Default for DrawSettings {
    fn default() -> Self {
        DrawSettings {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hosts: vec![
                HostPlacement::new("mex", 'A'),
                HostPlacement::new("can", 'B'),
                HostPlacement::new("usa", 'D'),
            ],
        }
    }
}
