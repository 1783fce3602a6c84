use serde::{Deserialize, Serialize};

use crate::core::serde_lenient::null_as_default;
use crate::core::{ChartData, SectionId};

/// The whole story document: exactly four named sections.
///
/// Fields missing from the source document, or set to `null`, fall back to
/// empty values instead of failing the load; only malformed JSON or a wrong
/// non-null value type is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub discovery: SectionData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: SectionData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crisis: SectionData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nexus: SectionData,
}

impl StoryData {
    #[must_use]
    pub fn section(&self, id: SectionId) -> &SectionData {
        match id {
            SectionId::Discovery => &self.discovery,
            SectionId::Origin => &self.origin,
            SectionId::Crisis => &self.crisis,
            SectionId::Nexus => &self.nexus,
        }
    }

    /// Sections paired with their ids, in render order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &SectionData)> {
        SectionId::ALL.into_iter().map(|id| (id, self.section(id)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub narrative: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chart_data: ChartData,
}
