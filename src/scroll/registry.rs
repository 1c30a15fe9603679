use std::collections::HashMap;

use super::Section;

/// Latest measured vertical offset of each section, relative to the top of
/// the scrollable content. Sections are measured independently and in no
/// particular order, so the map may be partial at any time.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    offsets: HashMap<Section, f64>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement, replacing whatever was recorded before.
    pub fn record(&mut self, section: Section, offset: f64) {
        if let Some(prev) = self.offsets.insert(section, offset) {
            if prev != offset {
                log::trace!("section {section} moved from {prev} to {offset}");
            }
        } else {
            log::trace!("section {section} measured at {offset}");
        }
    }

    pub fn lookup(&self, section: Section) -> Option<f64> {
        self.offsets.get(&section).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
