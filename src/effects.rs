//! Wetness effects feature: settings, rule set and the per-frame dirty flag

use serde_json::Value as JsonValue;

use crate::gpu::{DirectionalAmbient, GpuError, PerPassGpu, PerPassSink};
use crate::settings::{SettingsResult, WetnessSettings};
use crate::weather::{SceneContext, SkySnapshot};
use crate::wetness::{compute_wetness, WetnessRules};

/// Kind of shader about to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Lighting,
    Other,
}

/// Frame state the host hands over with each draw
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInputs<'a> {
    pub scene: Option<&'a SceneContext>,
    pub sky: Option<&'a SkySnapshot>,
    pub ambient: DirectionalAmbient,
}

pub struct WetnessEffects {
    pub settings: WetnessSettings,
    pub rules: WetnessRules,
    /// Set by `reset`, cleared after each recompute
    requires_update: bool,
    last: Option<PerPassGpu>,
}

impl WetnessEffects {
    pub fn new(settings: WetnessSettings, rules: WetnessRules) -> Self {
        Self {
            settings,
            rules,
            requires_update: true,
            last: None,
        }
    }

    /// Scene changed, recompute on the next lighting draw
    pub fn reset(&mut self) {
        self.requires_update = true;
    }

    pub fn requires_update(&self) -> bool {
        self.requires_update
    }

    /// Last record produced by `update`
    pub fn last(&self) -> Option<&PerPassGpu> {
        self.last.as_ref()
    }

    /// Recompute the per-pass record if the feature is dirty
    pub fn update(&mut self, frame: &FrameInputs<'_>) -> Option<PerPassGpu> {
        if !self.requires_update {
            return None;
        }
        self.requires_update = false;

        let wetness = compute_wetness(
            &self.rules,
            self.settings.enable_wetness_effects,
            frame.scene,
            frame.sky,
        );
        log::debug!("[WetnessEffects] Wetness {}", wetness);

        let record = PerPassGpu::new(wetness, &frame.ambient, &self.settings);
        self.last = Some(record);
        Some(record)
    }

    /// Called before each draw; uploads a fresh record ahead of lighting draws
    ///
    /// Returns whether a record was uploaded.
    pub fn draw<S: PerPassSink>(
        &mut self,
        sink: &mut S,
        shader: ShaderKind,
        frame: &FrameInputs<'_>,
    ) -> Result<bool, GpuError> {
        if shader != ShaderKind::Lighting {
            return Ok(false);
        }

        match self.update(frame) {
            Some(record) => {
                sink.upload(&record)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Load settings from the host's config document
    ///
    /// Settings are left alone when the document has no settings block.
    pub fn load(&mut self, root: &JsonValue) -> SettingsResult<()> {
        if self.settings.apply(root)? {
            self.reset();
        }
        Ok(())
    }

    /// Save settings into the host's config document
    pub fn save(&self, root: &mut JsonValue) -> SettingsResult<()> {
        self.settings.save(root)
    }
}

impl Default for WetnessEffects {
    fn default() -> Self {
        Self::new(WetnessSettings::default(), WetnessRules::default())
    }
}
