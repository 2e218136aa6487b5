//! Splash overlay state: load progress, then fade, then gone.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

/// Lifecycle of the splash overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    /// Counting tiles into the grid.
    #[default]
    Loading,
    /// All tiles placed; overlay is fading out.
    Loaded,
    /// Overlay removed.
    Hidden,
}

/// Progress state for the splash overlay shown while the grid populates.
#[derive(Clone, Debug, Default)]
pub struct SplashState {
    pub loaded: usize,
    pub total: usize,
    pub phase: SplashPhase,
}

impl SplashState {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: 0,
            total,
            phase: SplashPhase::Loading,
        }
    }

    /// Count one more tile as placed. Saturates at `total`.
    pub fn advance(&mut self) {
        if self.loaded < self.total {
            self.loaded += 1;
        }
    }

    /// Mark loading complete and start the fade.
    pub fn finish(&mut self) {
        self.phase = SplashPhase::Loaded;
    }

    /// Remove the overlay. Only valid once the fade has started.
    pub fn dismiss(&mut self) {
        if self.phase == SplashPhase::Loaded {
            self.phase = SplashPhase::Hidden;
        }
    }

    pub fn hidden(&self) -> bool {
        self.phase == SplashPhase::Hidden
    }

    /// Progress label shown inside the overlay.
    pub fn label(&self) -> String {
        match self.phase {
            SplashPhase::Loading => format!("Loading {}/{}", self.loaded, self.total),
            SplashPhase::Loaded | SplashPhase::Hidden => "Loaded".to_owned(),
        }
    }
}
