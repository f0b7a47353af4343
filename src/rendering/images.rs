//! Piece images loaded through the asset server
//!
//! Image ids map to `{images_dir}/{image_id}.png` under Bevy's asset root.
//! Display size is applied by the sprite, so every size shares one handle
//! per id; the cache still keys on size to honour the resolver contract.

use crate::view::{CachedImageResolver, ImageResolver};
use bevy::prelude::*;

pub struct AssetImageResolver {
    assets: AssetServer,
    images_dir: String,
}

impl AssetImageResolver {
    pub fn new(assets: AssetServer, images_dir: impl Into<String>) -> Self {
        Self {
            assets,
            images_dir: images_dir.into(),
        }
    }

    pub fn asset_path(&self, image_id: &str) -> String {
        asset_path(&self.images_dir, image_id)
    }
}

fn asset_path(images_dir: &str, image_id: &str) -> String {
    format!("{}/{}.png", images_dir.trim_end_matches('/'), image_id)
}

impl ImageResolver for AssetImageResolver {
    type Image = Handle<Image>;

    fn resolve(&mut self, image_id: &str, _width: f32, _height: f32) -> Handle<Image> {
        let path = self.asset_path(image_id);
        debug!("[IMAGES] Loading {}", path);
        self.assets.load(path)
    }
}

/// Cached resolver shared by the render systems
#[derive(Resource)]
pub struct PieceImages(CachedImageResolver<AssetImageResolver>);

impl PieceImages {
    pub fn new(resolver: AssetImageResolver) -> Self {
        Self(CachedImageResolver::new(resolver))
    }

    /// Handle for `image_id` drawn in a `size` × `size` square
    pub fn square(&mut self, image_id: &str, size: f32) -> Handle<Image> {
        self.0.resolve(image_id, size, size)
    }
}

pub fn setup_piece_images(
    mut commands: Commands,
    assets: Res<AssetServer>,
    config: Res<crate::core::ViewConfig>,
) {
    commands.insert_resource(PieceImages::new(AssetImageResolver::new(
        assets.clone(),
        config.images_dir.clone(),
    )));
}
