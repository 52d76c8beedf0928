//! Scene layers: mount, per-frame tick, remount, unmount.
//!
//! A layer owns one decoration plus the camera and parallax mapping used to
//! draw it. The host drives it with explicit calls from its frame callback;
//! there are no threads or channels, and dropping the layer frees the cloud.

use folio_common::RendererError;
use folio_config::schema::FolioConfig;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::camera::Camera;
use crate::cloud::Point;
use crate::decoration::{create_backdrop, create_hero, Decoration, FrameUniforms};
use crate::matrix::{self, Mat4};
use crate::rotation::{AxisMotion, Rotation};
use crate::scroll::ScrollMapper;

/// Which decoration a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Backdrop,
    Hero,
}

/// Result of one frame, suitable for snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameState {
    pub kind: LayerKind,
    pub elapsed: f32,
    pub rotation: Rotation,
    pub parallax_percent: f32,
    pub mvp: Mat4,
    pub point_count: usize,
    pub visible: bool,
    #[serde(skip)]
    pub uniforms: FrameUniforms,
}

pub struct BackdropLayer {
    kind: LayerKind,
    decoration: Box<dyn Decoration>,
    camera: Camera,
    mapper: ScrollMapper,
    uniforms: FrameUniforms,
}

impl BackdropLayer {
    /// Mount the page backdrop, generating its cloud once.
    pub fn mount<R: Rng + ?Sized>(config: &FolioConfig, rng: &mut R) -> Result<Self, RendererError> {
        let decoration = create_backdrop(config, rng)?;
        let layer = Self::with_decoration(
            LayerKind::Backdrop,
            decoration,
            Camera::from_config(&config.camera),
            ScrollMapper::from_config(&config.parallax),
        );
        info!(
            points = layer.point_count(),
            visible = layer.decoration.is_visible(),
            "backdrop mounted"
        );
        Ok(layer)
    }

    /// Mount the hero decoration. The hero scrolls with the page, so it gets
    /// no parallax, and its camera stays put: only the nodes move.
    pub fn mount_hero<R: Rng + ?Sized>(
        config: &FolioConfig,
        rng: &mut R,
    ) -> Result<Self, RendererError> {
        let decoration = create_hero(config, rng)?;
        let layer = Self::with_decoration(
            LayerKind::Hero,
            decoration,
            Camera {
                orbit: AxisMotion::Still,
                ..Camera::from_config(&config.camera)
            },
            ScrollMapper::new(0.0, 0.0),
        );
        info!(nodes = layer.point_count(), "hero mounted");
        Ok(layer)
    }

    pub fn with_decoration(
        kind: LayerKind,
        decoration: Box<dyn Decoration>,
        camera: Camera,
        mapper: ScrollMapper,
    ) -> Self {
        Self {
            kind,
            decoration,
            camera,
            mapper,
            uniforms: FrameUniforms::new(),
        }
    }

    /// Advance to `elapsed` seconds since mount.
    ///
    /// Rotation comes from absolute time, parallax from `scroll_progress`.
    /// The point cloud is never touched.
    pub fn frame(&mut self, elapsed: f32, scroll_progress: f32, aspect: f32) -> FrameState {
        self.decoration.tick(elapsed);

        let model = self.decoration.model_matrix();
        let view_projection = self.camera.view_projection(aspect, elapsed);
        let parallax_percent = self.mapper.offset_percent(scroll_progress);

        self.uniforms.mvp = matrix::mul(&view_projection, &model);
        self.uniforms.parallax_offset = parallax_percent;
        self.uniforms.time = elapsed;
        self.decoration.write_uniforms(&mut self.uniforms);

        FrameState {
            kind: self.kind,
            elapsed,
            rotation: self.decoration.rotation(),
            parallax_percent,
            mvp: self.uniforms.mvp,
            point_count: self.point_count(),
            visible: self.decoration.is_visible(),
            uniforms: self.uniforms,
        }
    }

    /// Discard the current decoration and generate a fresh one.
    pub fn remount<R: Rng + ?Sized>(
        &mut self,
        config: &FolioConfig,
        rng: &mut R,
    ) -> Result<(), RendererError> {
        let fresh = match self.kind {
            LayerKind::Backdrop => Self::mount(config, rng)?,
            LayerKind::Hero => Self::mount_hero(config, rng)?,
        };
        *self = fresh;
        debug!(kind = ?self.kind, "layer remounted");
        Ok(())
    }

    /// Release the layer and its points.
    pub fn unmount(self) {
        info!(kind = ?self.kind, points = self.point_count(), "layer unmounted");
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        self.decoration.points()
    }

    pub fn point_count(&self) -> usize {
        self.decoration.points().len()
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }
}
