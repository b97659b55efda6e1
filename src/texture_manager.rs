use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

/// A single GPU texture that is re-uploaded only when its source changes.
///
/// The source is identified by a version number: the canvas revision for the
/// canvas, a hue key for the colour picker. Asking for a version that is already
/// uploaded is free; a new version regenerates the image and replaces the
/// texture contents in place.
pub struct TextureSlot {
    name: String,
    options: TextureOptions,
    handle: Option<TextureHandle>,
    version: Option<u64>,
    uploads: usize,
}

impl std::fmt::Debug for TextureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureSlot")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl TextureSlot {
    pub fn new(name: impl Into<String>, options: TextureOptions) -> Self {
        Self {
            name: name.into(),
            options,
            handle: None,
            version: None,
            uploads: 0,
        }
    }

    /// Return the texture for `version`, uploading `generator()` if the
    /// texture is missing or holds another version.
    pub fn get_or_update<F>(&mut self, ctx: &Context, version: u64, generator: F) -> TextureId
    where
        F: FnOnce() -> ColorImage,
    {
        if self.version != Some(version) {
            let image = generator();
            if let Some(handle) = &mut self.handle {
                handle.set(image, self.options);
            } else {
                self.handle = Some(ctx.load_texture(self.name.as_str(), image, self.options));
            }
            self.version = Some(version);
            self.uploads += 1;
            log::trace!("Uploaded texture '{}' v{}", self.name, version);
        }
        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }

    /// Force the next request to upload again.
    pub fn invalidate(&mut self) {
        self.version = None;
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// Number of uploads performed so far.
    pub fn uploads(&self) -> usize {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_image() -> ColorImage {
        ColorImage::new([10, 10], egui::Color32::WHITE)
    }

    #[test]
    fn test_same_version_hits_cache() {
        let ctx = Context::default();
        let mut slot = TextureSlot::new("canvas", TextureOptions::NEAREST);

        let first = slot.get_or_update(&ctx, 1, mock_image);
        let second = slot.get_or_update(&ctx, 1, || panic!("should not regenerate"));

        assert_eq!(first, second);
        assert_eq!(slot.uploads(), 1);
    }

    #[test]
    fn test_new_version_reuses_texture() {
        let ctx = Context::default();
        let mut slot = TextureSlot::new("canvas", TextureOptions::NEAREST);

        let first = slot.get_or_update(&ctx, 1, mock_image);
        let second = slot.get_or_update(&ctx, 2, mock_image);

        assert_eq!(first, second);
        assert_eq!(slot.uploads(), 2);
        assert_eq!(slot.version(), Some(2));
    }

    #[test]
    fn test_invalidate_forces_upload() {
        let ctx = Context::default();
        let mut slot = TextureSlot::new("picker", TextureOptions::LINEAR);
        slot.get_or_update(&ctx, 7, mock_image);
        slot.invalidate();
        slot.get_or_update(&ctx, 7, mock_image);
        assert_eq!(slot.uploads(), 2);
    }
}
