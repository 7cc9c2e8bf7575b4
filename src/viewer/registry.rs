//! The to-do registry: viewer bookmarks with a note and a priority.
//!
//! Adding a to-do snapshots the camera pose and the current element
//! selection. Restoring it moves the camera back and re-selects the
//! elements. Colorizing paints every to-do's elements with its priority color.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CameraPose, Selection, ToDo, ToDoPriority};
use crate::viewer::error::ViewerError;
use crate::viewer::services::{CameraService, HighlightService, ViewerHandles};
use crate::viewer::styles::{SELECT_STYLE, priority_color, priority_style_id};

/// How colorizing treats a to-do that has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorizeMode {
    /// Stop at the first to-do without elements; later to-dos stay uncolored.
    #[default]
    StopAtFirstEmpty,
    /// Skip to-dos without elements and keep going.
    SkipEmpty,
}

/// Options for the to-do registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    /// Behavior of [`ToDoRegistry::toggle_colorize`].
    pub colorize_mode: ColorizeMode,
}

impl RegistryOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colorize mode.
    pub fn colorize_mode(mut self, mode: ColorizeMode) -> Self {
        self.colorize_mode = mode;
        self
    }
}

/// Ordered list of to-dos bound to a camera and a highlighter.
pub struct ToDoRegistry {
    camera: Box<dyn CameraService>,
    highlighter: Box<dyn HighlightService>,
    list: Vec<ToDo>,
    options: RegistryOptions,
    colorized: bool,
}

impl ToDoRegistry {
    /// Create a registry. Both service handles must be present.
    pub fn new(handles: ViewerHandles, options: RegistryOptions) -> Result<Self, ViewerError> {
        let (camera, highlighter) = handles.into_parts()?;
        Ok(Self {
            camera,
            highlighter,
            list: Vec::new(),
            options,
            colorized: false,
        })
    }

    /// Register the priority styles with the highlighter.
    pub fn setup(&mut self) {
        for &priority in ToDoPriority::all() {
            let style_id = priority_style_id(priority);
            log::debug!("Registering highlight style {}", style_id);
            self.highlighter
                .register_style(&style_id, priority_color(priority));
        }
    }

    /// Bookmark the current viewpoint and selection.
    pub fn add_to_do(
        &mut self,
        description: impl Into<String>,
        priority: ToDoPriority,
    ) -> Result<&ToDo, ViewerError> {
        if !self.camera.is_navigable() {
            return Err(ViewerError::precondition(
                "to-dos need the navigable camera in order to work",
            ));
        }

        let pose = CameraPose::new(self.camera.position(), self.camera.target());
        let selection = self.highlighter.current_selection();
        let todo = ToDo::new(description, priority, pose, selection);

        log::info!(
            "Added {} priority to-do {} with {} selected elements",
            todo.priority,
            todo.id(),
            todo.selection().element_count()
        );
        let index = self.list.len();
        self.list.push(todo);
        Ok(&self.list[index])
    }

    /// Return to a to-do's viewpoint and re-select its elements.
    pub fn restore(&mut self, id: Uuid) -> Result<(), ViewerError> {
        let Self {
            camera,
            highlighter,
            list,
            ..
        } = self;
        let todo = list
            .iter()
            .find(|todo| todo.id() == id)
            .ok_or(ViewerError::NotFound(id))?;
        Self::restore_with(camera.as_mut(), highlighter.as_mut(), todo);
        Ok(())
    }

    /// Return to the viewpoint of a to-do held by the caller.
    pub fn restore_entry(&mut self, todo: &ToDo) {
        Self::restore_with(self.camera.as_mut(), self.highlighter.as_mut(), todo);
    }

    /// An empty selection leaves the current highlight alone instead of
    /// clearing it.
    fn restore_with(
        camera: &mut dyn CameraService,
        highlighter: &mut dyn HighlightService,
        todo: &ToDo,
    ) {
        let pose = todo.camera();
        log::debug!("Restoring to-do {}", todo.id());
        camera.set_look_at(pose.position, pose.target, true);

        if todo.selection().is_empty() {
            return;
        }
        highlighter.apply_style(SELECT_STYLE, todo.selection());
    }

    /// Turn priority colors on or off.
    ///
    /// Returns the number of to-dos that were painted (zero when turning off).
    pub fn toggle_colorize(&mut self, active: bool) -> usize {
        self.colorized = active;
        if !active {
            for &priority in ToDoPriority::all() {
                self.highlighter.clear_style(&priority_style_id(priority));
            }
            log::debug!("Cleared priority colors");
            return 0;
        }

        let mut painted = 0;
        for todo in &self.list {
            if todo.selection().is_empty() {
                match self.options.colorize_mode {
                    ColorizeMode::StopAtFirstEmpty => break,
                    ColorizeMode::SkipEmpty => continue,
                }
            }
            self.highlighter
                .apply_style(&priority_style_id(todo.priority), todo.selection());
            painted += 1;
        }
        log::debug!("Colorized {} of {} to-dos", painted, self.list.len());
        painted
    }

    /// Whether priority colors are currently on.
    pub fn is_colorized(&self) -> bool {
        self.colorized
    }

    /// Reserved: removing to-dos is not implemented.
    pub fn delete_to_do(&mut self, id: Uuid) -> Result<(), ViewerError> {
        log::warn!("Ignoring request to delete to-do {}", id);
        Err(ViewerError::Unimplemented("delete_to_do"))
    }

    /// All to-dos in creation order.
    pub fn to_dos(&self) -> &[ToDo] {
        &self.list
    }

    /// Get a to-do by id.
    pub fn get(&self, id: Uuid) -> Option<&ToDo> {
        self.list.iter().find(|todo| todo.id() == id)
    }

    /// Get the number of to-dos.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if there are no to-dos.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Current element selection reported by the highlighter.
    pub fn current_selection(&self) -> Selection {
        self.highlighter.current_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct CameraState {
        navigable: bool,
        position: Vec3,
        target: Vec3,
        look_at_calls: Vec<(Vec3, Vec3, bool)>,
    }

    #[derive(Clone)]
    struct MockCamera(Rc<RefCell<CameraState>>);

    impl CameraService for MockCamera {
        fn is_navigable(&self) -> bool {
            self.0.borrow().navigable
        }

        fn position(&self) -> Vec3 {
            self.0.borrow().position
        }

        fn target(&self) -> Vec3 {
            self.0.borrow().target
        }

        fn set_look_at(&mut self, position: Vec3, target: Vec3, animate: bool) {
            let mut state = self.0.borrow_mut();
            state.position = position;
            state.target = target;
            state.look_at_calls.push((position, target, animate));
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum HighlightCall {
        Register(String, [u8; 3]),
        Apply(String, Selection),
        Clear(String),
    }

    #[derive(Debug, Default)]
    struct HighlightState {
        selection: Selection,
        calls: Vec<HighlightCall>,
    }

    #[derive(Clone)]
    struct MockHighlighter(Rc<RefCell<HighlightState>>);

    impl HighlightService for MockHighlighter {
        fn current_selection(&self) -> Selection {
            self.0.borrow().selection.clone()
        }

        fn register_style(&mut self, style_id: &str, color: [u8; 3]) {
            self.0
                .borrow_mut()
                .calls
                .push(HighlightCall::Register(style_id.to_string(), color));
        }

        fn apply_style(&mut self, style_id: &str, selection: &Selection) {
            self.0
                .borrow_mut()
                .calls
                .push(HighlightCall::Apply(style_id.to_string(), selection.clone()));
        }

        fn clear_style(&mut self, style_id: &str) {
            self.0
                .borrow_mut()
                .calls
                .push(HighlightCall::Clear(style_id.to_string()));
        }
    }

    struct Fixture {
        registry: ToDoRegistry,
        camera: Rc<RefCell<CameraState>>,
        highlight: Rc<RefCell<HighlightState>>,
    }

    fn fixture(options: RegistryOptions) -> Fixture {
        let camera = Rc::new(RefCell::new(CameraState {
            navigable: true,
            ..Default::default()
        }));
        let highlight = Rc::new(RefCell::new(HighlightState::default()));
        let handles = ViewerHandles::new()
            .camera(MockCamera(camera.clone()))
            .highlighter(MockHighlighter(highlight.clone()));
        Fixture {
            registry: ToDoRegistry::new(handles, options).unwrap(),
            camera,
            highlight,
        }
    }

    impl Fixture {
        fn set_pose(&self, position: Vec3, target: Vec3) {
            let mut camera = self.camera.borrow_mut();
            camera.position = position;
            camera.target = target;
        }

        fn select(&self, selection: Selection) {
            self.highlight.borrow_mut().selection = selection;
        }

        fn add(&mut self, priority: ToDoPriority, selection: Selection) -> Uuid {
            self.select(selection);
            self.registry.add_to_do("note", priority).unwrap().id()
        }

        fn take_calls(&self) -> Vec<HighlightCall> {
            std::mem::take(&mut self.highlight.borrow_mut().calls)
        }
    }

    #[test]
    fn test_new_requires_both_handles() {
        let camera = Rc::new(RefCell::new(CameraState::default()));
        let highlight = Rc::new(RefCell::new(HighlightState::default()));

        let missing_highlighter = ViewerHandles::new().camera(MockCamera(camera));
        assert!(matches!(
            ToDoRegistry::new(missing_highlighter, RegistryOptions::new()),
            Err(ViewerError::Precondition(_))
        ));

        let missing_camera = ViewerHandles::new().highlighter(MockHighlighter(highlight));
        assert!(matches!(
            ToDoRegistry::new(missing_camera, RegistryOptions::new()),
            Err(ViewerError::Precondition(_))
        ));
    }

    #[test]
    fn test_setup_registers_priority_styles() {
        let mut fx = fixture(RegistryOptions::new());
        fx.registry.setup();

        let calls = fx.take_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[1],
            HighlightCall::Register(
                priority_style_id(ToDoPriority::Medium),
                [0x59, 0x7c, 0xff]
            )
        );
    }

    #[test]
    fn test_add_requires_navigable_camera() {
        let mut fx = fixture(RegistryOptions::new());
        fx.camera.borrow_mut().navigable = false;

        let err = fx.registry.add_to_do("note", ToDoPriority::Low).unwrap_err();
        assert!(matches!(err, ViewerError::Precondition(_)));
        assert!(fx.registry.is_empty());
    }

    #[test]
    fn test_add_captures_pose_by_value() {
        let mut fx = fixture(RegistryOptions::new());
        let position = Vec3::new(10.0, 5.0, -3.0);
        let target = Vec3::new(0.0, 1.0, 0.0);
        fx.set_pose(position, target);

        let id = fx.add(ToDoPriority::High, Selection::new());

        fx.set_pose(Vec3::new(99.0, 99.0, 99.0), Vec3::default());

        let todo = fx.registry.get(id).unwrap();
        assert_eq!(todo.camera().position, position);
        assert_eq!(todo.camera().target, target);
        assert_eq!(todo.description, "note");
        assert_eq!(todo.priority, ToDoPriority::High);
    }

    #[test]
    fn test_add_captures_selection_by_value() {
        let mut fx = fixture(RegistryOptions::new());
        let selection = Selection::new().with("m1", [1, 2]);
        let id = fx.add(ToDoPriority::Low, selection.clone());

        fx.select(Selection::new().with("m2", [9]));

        assert_eq!(fx.registry.get(id).unwrap().selection(), &selection);
        assert_eq!(
            fx.registry.current_selection(),
            Selection::new().with("m2", [9])
        );
    }

    #[test]
    fn test_to_dos_keep_creation_order() {
        let mut fx = fixture(RegistryOptions::new());
        let a = fx.add(ToDoPriority::Low, Selection::new());
        let b = fx.add(ToDoPriority::High, Selection::new());

        let ids: Vec<_> = fx.registry.to_dos().iter().map(ToDo::id).collect();
        assert_eq!(ids, [a, b]);
        assert_eq!(fx.registry.len(), 2);
        assert!(fx.registry.to_dos()[0].created_at <= fx.registry.to_dos()[1].created_at);
    }

    #[test]
    fn test_restore_moves_camera_and_reselects() {
        let mut fx = fixture(RegistryOptions::new());
        let position = Vec3::new(1.0, 2.0, 3.0);
        let target = Vec3::new(4.0, 5.0, 6.0);
        fx.set_pose(position, target);
        let selection = Selection::new().with("m1", [7]);
        let id = fx.add(ToDoPriority::Medium, selection.clone());

        fx.set_pose(Vec3::default(), Vec3::default());
        fx.take_calls();
        fx.registry.restore(id).unwrap();

        let camera = fx.camera.borrow();
        assert_eq!(camera.look_at_calls, vec![(position, target, true)]);
        drop(camera);
        assert_eq!(
            fx.take_calls(),
            vec![HighlightCall::Apply(SELECT_STYLE.to_string(), selection)]
        );
    }

    #[test]
    fn test_restore_empty_selection_keeps_highlight() {
        let mut fx = fixture(RegistryOptions::new());
        let id = fx.add(ToDoPriority::Medium, Selection::new());
        fx.take_calls();

        fx.registry.restore(id).unwrap();

        assert_eq!(fx.camera.borrow().look_at_calls.len(), 1);
        assert!(fx.take_calls().is_empty());
    }

    #[test]
    fn test_restore_entry_held_by_caller() {
        let mut fx = fixture(RegistryOptions::new());
        let id = fx.add(ToDoPriority::Low, Selection::new().with("m1", [3]));
        let todo = fx.registry.get(id).unwrap().clone();
        fx.take_calls();

        fx.registry.restore_entry(&todo);
        assert_eq!(fx.take_calls().len(), 1);
    }

    #[test]
    fn test_restore_unknown_id() {
        let mut fx = fixture(RegistryOptions::new());
        let missing = Uuid::new_v4();
        assert_eq!(
            fx.registry.restore(missing),
            Err(ViewerError::NotFound(missing))
        );
        assert!(fx.camera.borrow().look_at_calls.is_empty());
    }

    #[test]
    fn test_colorize_stops_at_first_empty_selection() {
        let mut fx = fixture(RegistryOptions::new());
        let low = Selection::new().with("m1", [1]);
        fx.add(ToDoPriority::Low, low.clone());
        fx.add(ToDoPriority::High, Selection::new());
        fx.add(ToDoPriority::Medium, Selection::new().with("m1", [2]));
        fx.take_calls();

        let painted = fx.registry.toggle_colorize(true);

        assert_eq!(painted, 1);
        assert_eq!(
            fx.take_calls(),
            vec![HighlightCall::Apply(
                priority_style_id(ToDoPriority::Low),
                low
            )]
        );
        assert!(fx.registry.is_colorized());
    }

    #[test]
    fn test_colorize_skip_empty_mode_continues() {
        let mut fx = fixture(RegistryOptions::new().colorize_mode(ColorizeMode::SkipEmpty));
        let low = Selection::new().with("m1", [1]);
        let medium = Selection::new().with("m1", [2]);
        fx.add(ToDoPriority::Low, low.clone());
        fx.add(ToDoPriority::High, Selection::new());
        fx.add(ToDoPriority::Medium, medium.clone());
        fx.take_calls();

        let painted = fx.registry.toggle_colorize(true);

        assert_eq!(painted, 2);
        assert_eq!(
            fx.take_calls(),
            vec![
                HighlightCall::Apply(priority_style_id(ToDoPriority::Low), low),
                HighlightCall::Apply(priority_style_id(ToDoPriority::Medium), medium),
            ]
        );
    }

    #[test]
    fn test_colorize_off_clears_all_priorities() {
        let mut fx = fixture(RegistryOptions::new());
        let expected: Vec<_> = ToDoPriority::all()
            .iter()
            .map(|&p| HighlightCall::Clear(priority_style_id(p)))
            .collect();

        // Off without ever having been on
        assert_eq!(fx.registry.toggle_colorize(false), 0);
        assert_eq!(fx.take_calls(), expected);

        fx.add(ToDoPriority::Low, Selection::new().with("m1", [1]));
        fx.registry.toggle_colorize(true);
        fx.take_calls();

        fx.registry.toggle_colorize(false);
        assert_eq!(fx.take_calls(), expected);
        fx.registry.toggle_colorize(false);
        assert_eq!(fx.take_calls(), expected);
        assert!(!fx.registry.is_colorized());
    }

    #[test]
    fn test_delete_is_unimplemented() {
        let mut fx = fixture(RegistryOptions::new());
        let id = fx.add(ToDoPriority::Low, Selection::new());

        assert_eq!(
            fx.registry.delete_to_do(id),
            Err(ViewerError::Unimplemented("delete_to_do"))
        );
        assert_eq!(fx.registry.len(), 1);
    }
}
