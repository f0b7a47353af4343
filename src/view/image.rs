//! Image resolution for piece nodes
//!
//! The view only knows image ids such as `"rook_white"`. Turning an id into
//! something drawable is the resolver's job; [`CachedImageResolver`] adds
//! memoisation on top of any resolver.

use std::collections::HashMap;

/// Maps an image id and a target size to a renderable image
pub trait ImageResolver {
    type Image: Clone;

    fn resolve(&mut self, image_id: &str, width: f32, height: f32) -> Self::Image;
}

/// Memoises another resolver by `(image_id, width, height)`
pub struct CachedImageResolver<R: ImageResolver> {
    inner: R,
    cache: HashMap<(String, u32, u32), R::Image>,
}

impl<R: ImageResolver> CachedImageResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: ImageResolver> ImageResolver for CachedImageResolver<R> {
    type Image = R::Image;

    fn resolve(&mut self, image_id: &str, width: f32, height: f32) -> Self::Image {
        let key = (image_id.to_string(), width.to_bits(), height.to_bits());
        if let Some(image) = self.cache.get(&key) {
            return image.clone();
        }
        let image = self.inner.resolve(image_id, width, height);
        self.cache.insert(key, image.clone());
        image
    }
}
