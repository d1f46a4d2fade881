use std::fmt;

/// The window and scene the application is currently working with.
///
/// Neither is owned here: both live elsewhere for at least `'a`. Construct
/// one at startup and hand it by reference to whatever needs it. Nothing
/// is synchronized; sharing across threads is up to `W` and `S`.
pub struct AppState<'a, W, S> {
    window: Option<&'a W>,
    scene: Option<&'a S>,
}

impl<'a, W, S> AppState<'a, W, S> {
    pub fn new() -> Self {
        Self {
            window: None,
            scene: None,
        }
    }

    pub fn with_window(window: &'a W) -> Self {
        Self {
            window: Some(window),
            scene: None,
        }
    }

    pub fn window(&self) -> Option<&'a W> {
        self.window
    }

    pub fn scene(&self) -> Option<&'a S> {
        self.scene
    }

    pub fn is_initialized(&self) -> bool {
        self.window.is_some()
    }

    /// Returns the previously active window.
    pub fn set_window(&mut self, window: &'a W) -> Option<&'a W> {
        self.window.replace(window)
    }

    /// Returns the previously active scene.
    pub fn replace_scene(&mut self, scene: &'a S) -> Option<&'a S> {
        self.scene.replace(scene)
    }

    pub fn take_scene(&mut self) -> Option<&'a S> {
        self.scene.take()
    }

    pub fn teardown(&mut self) {
        self.scene = None;
        self.window = None;
    }
}

impl<'a, W, S> Default for AppState<'a, W, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, W, S> fmt::Debug for AppState<'a, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<AppState window: {:?}, scene: {:?}>",
            self.window.map(|window| window as *const W),
            self.scene.map(|scene| scene as *const S)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window(&'static str);
    struct Scene(&'static str);

    #[test]
    fn starts_empty() {
        let state: AppState<Window, Scene> = AppState::default();

        assert!(!state.is_initialized());
        assert!(state.window().is_none());
        assert!(state.scene().is_none());
    }

    #[test]
    fn holds_one_window_and_one_scene() {
        let window = Window("main");
        let menu = Scene("menu");
        let level = Scene("level");

        let mut state = AppState::with_window(&window);
        assert!(state.is_initialized());
        assert!(state.replace_scene(&menu).is_none());

        let previous = state.replace_scene(&level).map(|scene| scene.0);
        assert_eq!(previous, Some("menu"));
        assert_eq!(state.scene().map(|scene| scene.0), Some("level"));
        assert_eq!(state.window().map(|window| window.0), Some("main"));
    }

    #[test]
    fn set_window_returns_the_old_one() {
        let first = Window("first");
        let second = Window("second");

        let mut state: AppState<Window, Scene> = AppState::new();
        assert!(state.set_window(&first).is_none());
        assert_eq!(state.set_window(&second).map(|window| window.0), Some("first"));
    }

    #[test]
    fn teardown_clears_both() {
        let window = Window("main");
        let scene = Scene("level");

        let mut state = AppState::with_window(&window);
        state.replace_scene(&scene);
        assert_eq!(state.take_scene().map(|scene| scene.0), Some("level"));
        assert!(state.scene().is_none());

        state.replace_scene(&scene);
        state.teardown();
        assert!(!state.is_initialized());
        assert!(state.scene().is_none());
    }
}
