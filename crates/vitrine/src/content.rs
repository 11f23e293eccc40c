use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A full showcase definition, loaded from a YAML file.
///
/// Every list section may be empty; features backed by an empty list
/// degrade to an inert state instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Showcase {
    pub brand: Brand,

    #[serde(default)]
    pub nav: Vec<NavLink>,

    #[serde(default)]
    pub hero: Vec<HeroSlide>,

    #[serde(default)]
    pub gallery: Vec<GalleryItem>,

    #[serde(default)]
    pub packages: Vec<Package>,

    #[serde(default)]
    pub videos: Vec<VideoClip>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    /// WhatsApp number in international format without '+', e.g. "6282110821485".
    pub whatsapp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub section: SectionId,
}

/// Anchor targets for navigation links and smooth scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    Gallery,
    Packages,
    Videos,
    Contact,
}

impl SectionId {
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Home,
            SectionId::Gallery,
            SectionId::Packages,
            SectionId::Videos,
            SectionId::Contact,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,

    #[serde(default)]
    pub caption: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub price: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoClip {
    pub title: String,

    /// Clip length in seconds, used to drive the simulated playback state.
    #[serde(default = "default_clip_secs")]
    pub duration_secs: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PathBuf>,
}

fn default_clip_secs() -> f32 {
    30.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(default)]
    pub intro: String,
}

impl Showcase {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("Showcase file not found: {}", path.display())
            } else {
                anyhow::anyhow!("Failed to read {}: {e}", path.display())
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let showcase: Showcase = serde_yaml::from_str(contents)?;
        Ok(showcase)
    }

    /// All image/thumbnail paths referenced by the showcase, relative to
    /// the showcase file's directory.
    pub fn asset_paths(&self) -> Vec<&Path> {
        let mut paths = Vec::new();
        for slide in &self.hero {
            if let Some(p) = &slide.image {
                paths.push(p.as_path());
            }
        }
        for item in &self.gallery {
            if let Some(p) = &item.image {
                paths.push(p.as_path());
            }
        }
        for clip in &self.videos {
            if let Some(p) = &clip.thumbnail {
                paths.push(p.as_path());
            }
        }
        paths
    }

    /// Sections that actually have content, in page order.
    pub fn sections(&self) -> Vec<SectionId> {
        let mut out = vec![SectionId::Home];
        if !self.gallery.is_empty() {
            out.push(SectionId::Gallery);
        }
        if !self.packages.is_empty() {
            out.push(SectionId::Packages);
        }
        if !self.videos.is_empty() {
            out.push(SectionId::Videos);
        }
        if self.contact.is_some() {
            out.push(SectionId::Contact);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../../sample-showcases/archipelago.yaml");

    #[test]
    fn test_parse_sample_showcase() {
        let showcase = Showcase::parse(SAMPLE).expect("sample showcase should parse");
        assert_eq!(showcase.brand.name, "Archipelago Tours");
        assert_eq!(showcase.brand.whatsapp, "6282110821485");
        assert_eq!(showcase.hero.len(), 5, "sample has five hero slides");
        assert_eq!(showcase.nav.len(), 5);
        assert_eq!(showcase.packages.len(), 3);
        assert!(!showcase.gallery.is_empty());
        assert!(!showcase.videos.is_empty());
        assert!(showcase.contact.is_some());
    }

    #[test]
    fn test_minimal_showcase_defaults() {
        let yaml = "brand:\n  name: Test\n  whatsapp: \"123\"\n";
        let showcase = Showcase::parse(yaml).expect("minimal showcase should parse");
        assert!(showcase.hero.is_empty());
        assert!(showcase.nav.is_empty());
        assert!(showcase.gallery.is_empty());
        assert!(showcase.contact.is_none());
        assert_eq!(showcase.sections(), vec![SectionId::Home]);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = "brand:\n  name: Test\n  whatsapp: \"123\"\nbogus: []\n";
        assert!(
            Showcase::parse(yaml).is_err(),
            "unknown top-level sections should be rejected"
        );
    }

    #[test]
    fn test_asset_paths_collects_all_images() {
        let showcase = Showcase::parse(SAMPLE).expect("sample showcase should parse");
        let count = showcase.hero.iter().filter(|s| s.image.is_some()).count()
            + showcase.gallery.iter().filter(|g| g.image.is_some()).count()
            + showcase
                .videos
                .iter()
                .filter(|v| v.thumbnail.is_some())
                .count();
        assert_eq!(showcase.asset_paths().len(), count);
    }

    #[test]
    fn test_sections_follow_content() {
        let showcase = Showcase::parse(SAMPLE).expect("sample showcase should parse");
        let sections = showcase.sections();
        assert_eq!(sections.first(), Some(&SectionId::Home));
        assert!(sections.contains(&SectionId::Contact));
    }
}
