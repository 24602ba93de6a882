use crate::geometry::{SURFACE_PRESETS, SphereParams, SurfaceKind, SurfaceSpec, TorusParams};

/// Editable copy of the surface parameters. Both families keep their own
/// values so switching back and forth does not lose edits.
pub struct UiState {
    pub selected_preset: Option<usize>,
    pub surface_kind: SurfaceKind,
    pub sphere: SphereParams,
    pub torus: TorusParams,
    pub needs_generate: bool,
    pub show_overlay: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_spec(SurfaceSpec::default())
    }
}

impl UiState {
    pub fn from_spec(spec: SurfaceSpec) -> Self {
        let mut state = Self {
            selected_preset: None,
            surface_kind: spec.kind(),
            sphere: SphereParams::default(),
            torus: TorusParams::default(),
            needs_generate: false,
            show_overlay: true,
        };
        state.load_spec(spec);
        state.selected_preset = SURFACE_PRESETS.iter().position(|p| p.spec == spec);
        state
    }

    pub fn load_spec(&mut self, spec: SurfaceSpec) {
        self.surface_kind = spec.kind();
        match spec {
            SurfaceSpec::Sphere(params) => self.sphere = params,
            SurfaceSpec::Torus(params) => self.torus = params,
        }
    }

    pub fn apply_preset(&mut self, index: usize) {
        if let Some(preset) = SURFACE_PRESETS.get(index) {
            self.load_spec(preset.spec);
            self.selected_preset = Some(index);
            self.needs_generate = true;
        }
    }

    pub fn current_spec(&self) -> SurfaceSpec {
        match self.surface_kind {
            SurfaceKind::Sphere => SurfaceSpec::Sphere(self.sphere),
            SurfaceKind::Torus => SurfaceSpec::Torus(self.torus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_startup_surface() {
        let spec = SURFACE_PRESETS[3].spec;
        let state = UiState::from_spec(spec);
        assert_eq!(state.current_spec(), spec);
        assert_eq!(state.selected_preset, Some(3));
        assert!(!state.needs_generate);
    }

    #[test]
    fn custom_surface_has_no_preset() {
        let spec = SurfaceSpec::Sphere(SphereParams {
            n_phi: 3,
            ..SphereParams::default()
        });
        assert_eq!(UiState::from_spec(spec).selected_preset, None);
    }

    #[test]
    fn switching_kind_keeps_other_edits() {
        let mut state = UiState::default();
        state.sphere.n_phi = 17;
        state.apply_preset(1);
        assert_eq!(state.surface_kind, SurfaceKind::Torus);
        assert!(state.needs_generate);

        state.surface_kind = SurfaceKind::Sphere;
        assert_eq!(state.current_spec().resolution(), (17, 400));
    }

    #[test]
    fn out_of_range_preset_is_ignored() {
        let mut state = UiState::default();
        state.apply_preset(SURFACE_PRESETS.len());
        assert_eq!(state.selected_preset, Some(0));
        assert!(!state.needs_generate);
    }
}
