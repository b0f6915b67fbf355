use std::path::{Path, PathBuf};

use image::DynamicImage;
use kiss3d::resource::TextureManager;
use kiss3d::scene::SceneNode;
use log::warn;

/// Decodes an image file, or returns `None` if it is missing or unreadable.
pub fn load_image(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("Could not load texture {}: {}, using plain color", path.display(), e);
            None
        }
    }
}

/// Loads textures from the asset directory. A file that is missing or fails to
/// decode leaves the node in its plain color.
pub struct TextureLoader {
    dir: PathBuf,
}

impl TextureLoader {
    pub fn new(dir: &Path) -> Self {
        TextureLoader {
            dir: dir.to_path_buf(),
        }
    }

    pub fn apply(&self, node: &mut SceneNode, file: Option<&str>) {
        let file = match file {
            Some(file) => file,
            None => return,
        };
        let mut image = match load_image(&self.dir.join(file)) {
            Some(image) => Some(image),
            None => return,
        };

        let texture = TextureManager::get_global_manager(|tm| {
            image.take().map(|image| tm.add_image(image, file))
        });
        if let Some(texture) = texture {
            // Textures are tinted by the node color
            node.set_color(1.0, 1.0, 1.0);
            node.set_texture(texture);
        }
    }
}
