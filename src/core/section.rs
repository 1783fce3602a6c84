use std::fmt;

/// One of the four fixed narrative parts of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Discovery,
    Origin,
    Crisis,
    Nexus,
}

impl SectionId {
    /// Render order of the sections.
    pub const ALL: [SectionId; 4] = [
        SectionId::Discovery,
        SectionId::Origin,
        SectionId::Crisis,
        SectionId::Nexus,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Origin => "origin",
            Self::Crisis => "crisis",
            Self::Nexus => "nexus",
        }
    }

    #[must_use]
    pub fn title_target(self) -> String {
        format!("{}-title", self.name())
    }

    #[must_use]
    pub fn narrative_target(self) -> String {
        format!("{}-narrative", self.name())
    }

    #[must_use]
    pub fn chart_target(self) -> String {
        format!("{}-chart", self.name())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
