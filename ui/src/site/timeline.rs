//! Chronological anchors and the timeline carousel.

use crate::content::ContentTree;

pub const TIMELINE_YEARS: [u16; 16] = [
    1988, 1991, 1997, 1998, 2001, 2002, 2006, 2007, 2008, 2009, 2012, 2015, 2016, 2017, 2018,
    2019,
];

pub const TIMELINE_AUTOPLAY_MS: u64 = 10_000;

/// Language-independent part of a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineAnchor {
    pub year: u16,
    pub image: String,
}

/// Anchor decorated with text from the active tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSlide {
    pub year: u16,
    pub image: String,
    pub title: String,
    pub description: String,
}

pub fn anchors() -> Vec<TimelineAnchor> {
    TIMELINE_YEARS
        .iter()
        .map(|&year| TimelineAnchor {
            year,
            image: format!("/assets/timeline/{year}.jpg"),
        })
        .collect()
}

/// Overlay text by year; years the active tree lacks keep the default text.
pub fn slides(
    anchors: &[TimelineAnchor],
    tree: &ContentTree,
    default: &ContentTree,
) -> Vec<TimelineSlide> {
    anchors
        .iter()
        .map(|anchor| {
            let text = tree
                .timeline_text(anchor.year)
                .or_else(|| default.timeline_text(anchor.year))
                .unwrap_or_default();
            TimelineSlide {
                year: anchor.year,
                image: anchor.image.clone(),
                title: text.title,
                description: text.description,
            }
        })
        .collect()
}

/// Active slide with wrap-around stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCarousel {
    len: usize,
    active: usize,
}

impl TimelineCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn year(&self) -> Option<u16> {
        TIMELINE_YEARS.get(self.active).copied()
    }

    pub fn show(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn anchors_cover_every_year_in_order() {
        let anchors = anchors();
        assert_eq!(anchors.len(), TIMELINE_YEARS.len());
        assert!(anchors.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(anchors[0].image, "/assets/timeline/1988.jpg");
    }

    #[test]
    fn overlay_is_keyed_by_year_not_position() {
        let english = ContentTree::english();
        let hindi = ContentTree::from_pairs(
            Language::Hindi,
            [
                ("timeline-2007-title", "ऐतिहासिक पूर्ण बहुमत"),
                ("timeline-2007-description", "पूर्ण बहुमत"),
            ],
        );
        let slides = slides(&anchors(), &hindi, &english);
        let first = &slides[0];
        assert_eq!(first.year, 1988);
        assert_eq!(first.title, "Political Foundation Campaign");
        let s2007 = slides.iter().find(|s| s.year == 2007).expect("2007");
        assert_eq!(s2007.title, "ऐतिहासिक पूर्ण बहुमत");
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let mut carousel = TimelineCarousel::new(3);
        carousel.prev();
        assert_eq!(carousel.active(), 2);
        carousel.next();
        assert_eq!(carousel.active(), 0);
        carousel.show(7);
        assert_eq!(carousel.active(), 0);
        carousel.show(1);
        assert_eq!(carousel.year(), Some(1991));
    }
}
