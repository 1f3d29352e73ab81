use anyhow::{bail, Result};

/// Construction-time gallery configuration. Immutable once the gallery is
/// mounted.
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub sphere_id: String,
    pub image_count: usize,
    pub radius: f64,
    /// Image URL prefix; the variant number and extension are appended.
    pub image_pattern: String,
    pub image_extension: String,
    pub image_variant_count: usize,

    // Page chrome element ids (optional on the page)
    pub btn_id: String,
    pub sound_id: String,
    pub start_btn_id: String,
    pub intro_screen_id: String,
    pub intro_video_id: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sphere_id: "sphere".into(),
            image_count: 150,
            radius: 350.0,
            image_pattern: "/image".into(),
            image_extension: ".jpg".into(),
            image_variant_count: 5,
            btn_id: "tvNoiseBtn".into(),
            sound_id: "sound1".into(),
            start_btn_id: "startBtn".into(),
            intro_screen_id: "introScreen".into(),
            intro_video_id: "introVideo".into(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.image_variant_count == 0 {
            bail!("image_variant_count must be at least 1");
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            bail!("radius must be finite and positive, got {}", self.radius);
        }
        Ok(())
    }

    /// URL of the image bound to tile `index`: variants cycle `1..=image_variant_count`.
    pub fn image_url(&self, index: usize) -> String {
        let variant = index % self.image_variant_count.max(1) + 1;
        format!("{}{}{}", self.image_pattern, variant, self.image_extension)
    }
}
