//! Contracts for the viewer collaborators the registry drives.
//!
//! The 3D engine and the BIM framework live outside this crate. The registry
//! only needs a camera it can read and move, and a highlighter it can query
//! for the current selection and paint named styles with.

use crate::model::{Selection, Vec3};
use crate::viewer::error::ViewerError;

/// Camera controls of the viewer.
pub trait CameraService {
    /// Whether this is the navigable (orbit/first-person) camera that
    /// supports reading and setting a look-at pose.
    fn is_navigable(&self) -> bool;

    /// Current camera position.
    fn position(&self) -> Vec3;

    /// Point the camera is looking at.
    fn target(&self) -> Vec3;

    /// Move the camera, optionally animating the transition.
    fn set_look_at(&mut self, position: Vec3, target: Vec3, animate: bool);
}

/// Element highlighter of the viewer.
pub trait HighlightService {
    /// The elements currently selected by the user.
    ///
    /// Returns an owned copy; later selection changes do not affect it.
    fn current_selection(&self) -> Selection;

    /// Define a named style painted with a solid color.
    fn register_style(&mut self, style_id: &str, color: [u8; 3]);

    /// Paint a style over exactly the given elements.
    fn apply_style(&mut self, style_id: &str, selection: &Selection);

    /// Remove a style from every element.
    fn clear_style(&mut self, style_id: &str);
}

/// Service handles injected into the registry at construction.
#[derive(Default)]
pub struct ViewerHandles {
    camera: Option<Box<dyn CameraService>>,
    highlighter: Option<Box<dyn HighlightService>>,
}

impl ViewerHandles {
    /// Create an empty set of handles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the camera service.
    pub fn camera(mut self, camera: impl CameraService + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    /// Set the highlight service.
    pub fn highlighter(mut self, highlighter: impl HighlightService + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// Take both handles, failing if either is missing.
    pub(crate) fn into_parts(
        self,
    ) -> Result<(Box<dyn CameraService>, Box<dyn HighlightService>), ViewerError> {
        let camera = self
            .camera
            .ok_or_else(|| ViewerError::precondition("a camera service is required"))?;
        let highlighter = self
            .highlighter
            .ok_or_else(|| ViewerError::precondition("a highlight service is required"))?;
        Ok((camera, highlighter))
    }
}
