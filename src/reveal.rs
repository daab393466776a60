use std::collections::BTreeSet;

pub const HOME_SECTIONS: [&str; 7] = [
    "highlights",
    "about",
    "projects",
    "experience",
    "skills",
    "education",
    "contact",
];

pub const GALLERY_SECTION: &str = "gallery";

/// Ids are only ever added, so entrance animations play once per page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeenSections {
    seen: BTreeSet<String>,
}

impl SeenSections {
    pub fn mark_seen(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string())
    }

    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn section_class(&self, id: &str) -> &'static str {
        if self.is_seen(id) {
            "section section-in-view"
        } else {
            "section"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_is_reported_once() {
        let mut seen = SeenSections::default();

        assert!(seen.mark_seen("about"));
        assert!(!seen.mark_seen("about"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn seen_set_only_grows() {
        let mut seen = SeenSections::default();
        // Scroll down through the page, then back up past everything again.
        let sightings = HOME_SECTIONS
            .iter()
            .chain(HOME_SECTIONS.iter().rev())
            .chain(HOME_SECTIONS.iter());

        let mut previous = 0;
        for id in sightings {
            seen.mark_seen(id);
            assert!(seen.len() >= previous);
            assert!(seen.is_seen(id));
            previous = seen.len();
        }

        assert_eq!(seen.len(), HOME_SECTIONS.len());
        assert!(HOME_SECTIONS.iter().all(|id| seen.is_seen(id)));
    }

    #[test]
    fn section_class_reflects_visibility() {
        let mut seen = SeenSections::default();
        assert_eq!(seen.section_class(GALLERY_SECTION), "section");

        seen.mark_seen(GALLERY_SECTION);
        assert_eq!(seen.section_class(GALLERY_SECTION), "section section-in-view");
        assert_eq!(seen.section_class("skills"), "section");
    }
}
