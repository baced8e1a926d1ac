//! Photo gallery carousel and lightbox state.

pub const GALLERY_AUTOPLAY_MS: u64 = 4_000;
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/450x550?text=Image+Not+Found";

/// One slide as declared in markup (`data-image`, `data-title`, `data-description`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideRecord {
    pub image: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SlideRecord {
    pub fn new(image: &str, title: &str, description: &str) -> Self {
        let non_blank = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        Self {
            image: non_blank(image),
            title: non_blank(title),
            description: non_blank(description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub title: String,
    pub description: String,
}

/// Slides shipped with the site.
pub fn default_slides() -> Vec<SlideRecord> {
    [
        ("/assets/gallery/1.jpg", "Foundation Day Rally", "Supporters gather to mark the founding of the party on 14 April 1984."),
        ("/assets/gallery/2.jpg", "Tribute to Babasaheb", "Floral tribute at the statue of Babasaheb Dr. Bhimrao Ambedkar."),
        ("/assets/gallery/3.jpg", "Sarv Samaj Bhaichara Rally", "A sea of blue flags at the Delhi rally."),
        ("/assets/gallery/4.jpg", "Oath Ceremony, Lucknow", "Behen Kumari. Mayawati takes oath as Chief Minister of Uttar Pradesh."),
        ("/assets/gallery/5.jpg", "Dalit Prerna Sthal", "The memorial park in Noida honouring Bahujan icons."),
        ("/assets/gallery/6.jpg", "Youth Convention", "Young members at the launch of the youth wing."),
        ("/assets/gallery/7.jpg", "Ambedkar Jayanti", "Cultural programme on Babasaheb's birth anniversary."),
        ("/assets/gallery/8.jpg", "Campaign Trail", "Addressing a public meeting ahead of the Lok Sabha elections."),
    ]
    .into_iter()
    .map(|(image, title, description)| SlideRecord::new(image, title, description))
    .collect()
}

/// Turn slide records into displayable images; gaps get a placeholder image
/// and an `Image N` title.
pub fn collect_images(records: &[SlideRecord]) -> Vec<GalleryImage> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let src = record.image.clone().unwrap_or_else(|| {
                tracing::warn!(slide = index + 1, "gallery slide has no image; using placeholder");
                PLACEHOLDER_IMAGE.to_string()
            });
            GalleryImage {
                src,
                title: record
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Image {}", index + 1)),
                description: record.description.clone().unwrap_or_default(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    Left,
    Right,
    Activate,
}

impl GalleryKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Enter" | " " | "Spacebar" => Some(Self::Activate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    current: usize,
    lightbox: Option<usize>,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            current: 0,
            lightbox: None,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn lightbox(&self) -> Option<&GalleryImage> {
        self.lightbox.and_then(|i| self.images.get(i))
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    fn step(&self, from: usize, forward: bool) -> usize {
        let len = self.images.len();
        if len == 0 {
            return 0;
        }
        if forward {
            (from + 1) % len
        } else {
            (from + len - 1) % len
        }
    }

    pub fn next(&mut self) {
        self.current = self.step(self.current, true);
    }

    pub fn prev(&mut self) {
        self.current = self.step(self.current, false);
    }

    pub fn show(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    pub fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.lightbox = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox_next(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some(self.step(i, true));
        }
    }

    pub fn lightbox_prev(&mut self) {
        if let Some(i) = self.lightbox {
            self.lightbox = Some(self.step(i, false));
        }
    }

    /// Apply a key press; `focused` is the slide holding focus, if any.
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: GalleryKey, focused: Option<usize>) -> bool {
        match (key, self.lightbox) {
            (GalleryKey::Escape, Some(_)) => self.close(),
            (GalleryKey::Left, Some(_)) => self.lightbox_prev(),
            (GalleryKey::Right, Some(_)) => self.lightbox_next(),
            (GalleryKey::Activate, None) => match focused {
                Some(index) => self.open(index),
                None => return false,
            },
            _ => return false,
        }
        true
    }

    pub fn autoplay_paused(&self, page_hidden: bool) -> bool {
        page_hidden || self.is_open()
    }

    /// One autoplay tick; returns whether the carousel advanced.
    pub fn autoplay_tick(&mut self, page_hidden: bool) -> bool {
        if self.autoplay_paused(page_hidden) || self.images.len() < 2 {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        Gallery::new(collect_images(&default_slides()[..n]))
    }

    #[test]
    fn missing_fields_get_placeholder_and_numbered_title() {
        let images = collect_images(&[
            SlideRecord::new("/a.jpg", "A", "first"),
            SlideRecord::new("", "", ""),
        ]);
        assert_eq!(images[1].src, PLACEHOLDER_IMAGE);
        assert_eq!(images[1].title, "Image 2");
        assert_eq!(images[1].description, "");
    }

    #[test]
    fn carousel_and_lightbox_wrap_around() {
        let mut g = gallery(3);
        g.prev();
        assert_eq!(g.current(), 2);
        g.next();
        assert_eq!(g.current(), 0);

        g.open(2);
        g.lightbox_next();
        assert_eq!(g.lightbox_index(), Some(0));
        g.lightbox_prev();
        assert_eq!(g.lightbox_index(), Some(2));
    }

    #[test]
    fn keyboard_controls_lightbox() {
        let mut g = gallery(4);
        assert!(!g.handle_key(GalleryKey::Escape, None));
        assert!(g.handle_key(GalleryKey::Activate, Some(1)));
        assert_eq!(g.lightbox_index(), Some(1));
        assert!(g.handle_key(GalleryKey::Right, None));
        assert_eq!(g.lightbox_index(), Some(2));
        assert!(g.handle_key(GalleryKey::Left, None));
        assert!(g.handle_key(GalleryKey::Escape, None));
        assert!(!g.is_open());
    }

    #[test]
    fn key_names_map_to_actions() {
        assert_eq!(GalleryKey::from_key(" "), Some(GalleryKey::Activate));
        assert_eq!(GalleryKey::from_key("ArrowRight"), Some(GalleryKey::Right));
        assert_eq!(GalleryKey::from_key("Tab"), None);
    }

    #[test]
    fn autoplay_pauses_for_lightbox_and_hidden_page() {
        let mut g = gallery(3);
        assert!(g.autoplay_tick(false));
        assert_eq!(g.current(), 1);
        assert!(!g.autoplay_tick(true));
        g.open(0);
        assert!(!g.autoplay_tick(false));
        g.close();
        assert!(g.autoplay_tick(false));
        assert_eq!(g.current(), 2);
    }
}
