use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use eframe::egui;
use log::debug;

use crate::image_utils::{decode_bytes, downscale_to_fit, to_color_image, THUMBNAIL_MAX, VIEWER_MAX};

/// Which texture tier a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Grid card thumbnail, downscaled aggressively.
    Thumb,
    /// Detail viewer texture, kept near full resolution.
    Viewer,
}

struct Decoded {
    path: PathBuf,
    tier: Tier,
    image: Option<egui::ColorImage>,
}

/// Background texture loader for the grid and the detail viewer.
///
/// Decoding happens off the UI thread; textures are created on the UI thread
/// while draining. Paths that failed to decode are remembered so they are not
/// retried every frame.
pub struct ThumbLoader {
    request_tx: Sender<(PathBuf, Tier)>,
    decoded_rx: Receiver<Decoded>,
    thumbs: HashMap<PathBuf, egui::TextureHandle>,
    viewers: HashMap<PathBuf, egui::TextureHandle>,
    pending: HashSet<(PathBuf, Tier)>,
    failed: HashSet<PathBuf>,
}

impl ThumbLoader {
    pub fn new() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<(PathBuf, Tier)>();
        let (decoded_tx, decoded_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok((path, tier)) = request_rx.recv() {
                let image = std::fs::read(&path)
                    .ok()
                    .and_then(|bytes| decode_bytes(&path, &bytes).ok())
                    .map(|img| {
                        let max = match tier {
                            Tier::Thumb => (THUMBNAIL_MAX, THUMBNAIL_MAX),
                            Tier::Viewer => VIEWER_MAX,
                        };
                        to_color_image(&downscale_to_fit(img, max))
                    });
                if image.is_none() {
                    debug!("unable to decode {}", path.display());
                }
                if decoded_tx.send(Decoded { path, tier, image }).is_err() {
                    break;
                }
            }
        });

        Self {
            request_tx,
            decoded_rx,
            thumbs: HashMap::new(),
            viewers: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Queue a decode unless the texture is already cached, in flight, or
    /// known to fail.
    pub fn request(&mut self, path: &PathBuf, tier: Tier) {
        if self.failed.contains(path) {
            return;
        }
        let cached = match tier {
            Tier::Thumb => self.thumbs.contains_key(path),
            Tier::Viewer => self.viewers.contains_key(path),
        };
        let key = (path.clone(), tier);
        if cached || self.pending.contains(&key) {
            return;
        }
        self.pending.insert(key);
        let _ = self.request_tx.send((path.clone(), tier));
    }

    /// Turn finished decodes into textures. Must run on the UI thread.
    pub fn drain(&mut self, ctx: &egui::Context) {
        while let Ok(decoded) = self.decoded_rx.try_recv() {
            self.pending.remove(&(decoded.path.clone(), decoded.tier));
            let Some(image) = decoded.image else {
                self.failed.insert(decoded.path);
                continue;
            };
            let name = format!("{:?}:{}", decoded.tier, decoded.path.display());
            let texture = ctx.load_texture(name, image, egui::TextureOptions::LINEAR);
            match decoded.tier {
                Tier::Thumb => self.thumbs.insert(decoded.path, texture),
                Tier::Viewer => self.viewers.insert(decoded.path, texture),
            };
        }
    }

    pub fn thumb(&self, path: &PathBuf) -> Option<&egui::TextureHandle> {
        self.thumbs.get(path)
    }

    pub fn viewer(&self, path: &PathBuf) -> Option<&egui::TextureHandle> {
        self.viewers.get(path)
    }

    pub fn is_failed(&self, path: &PathBuf) -> bool {
        self.failed.contains(path)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop cached textures for a removed record.
    pub fn forget(&mut self, path: &PathBuf) {
        self.thumbs.remove(path);
        self.viewers.remove(path);
        self.failed.remove(path);
    }

    pub fn clear(&mut self) {
        self.thumbs.clear();
        self.viewers.clear();
        self.failed.clear();
    }
}
