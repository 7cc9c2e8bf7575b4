//! Browser entry point and the JavaScript-facing tracker.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::model::ToDoPriority;
use crate::store::{ImportReport, ProjectEntry, RecordStore, StoreError, TeamEntry};
use crate::viewer::{ToDoRegistry, ViewerHandles};
use crate::views::{ProjectCard, ProjectDetails, ToDoCard};
use crate::wasm_file;
use crate::wasm_viewer::{JsCamera, JsHighlighter};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    let level = config
        .preferences
        .log_level
        .to_level_filter()
        .to_level()
        .unwrap_or(log::Level::Error);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::log_1(&format!("Failed to initialize logging: {}", e).into());
    }
    log::info!("bimtrack {} starting", env!("CARGO_PKG_VERSION"));
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn report_summary(report: &ImportReport) -> String {
    let mut lines = vec![format!(
        "Imported {} projects and {} teams",
        report.projects_imported, report.teams_imported
    )];
    lines.extend(report.failure_messages());
    lines.extend(report.warnings.iter().map(|w| w.message.clone()));
    lines.join("\n")
}

/// Project and team records exposed to the page.
#[wasm_bindgen]
pub struct Tracker {
    store: Rc<RefCell<RecordStore>>,
    config: AppConfig,
}

#[wasm_bindgen]
impl Tracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Tracker {
        let config = AppConfig::load_from_local_storage().unwrap_or_default();
        Tracker {
            store: Rc::new(RefCell::new(config.preferences.record_store())),
            config,
        }
    }

    /// Create a project from the form fields (same shape as a snapshot
    /// entry). Returns the new project id.
    #[wasm_bindgen(js_name = createProject)]
    pub fn create_project(&self, json: &str) -> Result<String, JsValue> {
        let entry: ProjectEntry = serde_json::from_str(json).map_err(js_error)?;
        let data = entry.to_data().map_err(js_error)?;
        let mut store = self.store.borrow_mut();
        let project = store.create_project(data).map_err(js_error)?;
        Ok(project.id().to_string())
    }

    /// Create a team from the form fields. Without `teamProject` the team
    /// joins the current project.
    #[wasm_bindgen(js_name = createTeam)]
    pub fn create_team(&self, json: &str) -> Result<String, JsValue> {
        let entry: TeamEntry = serde_json::from_str(json).map_err(js_error)?;
        let data = entry.to_data().map_err(js_error)?;
        let mut store = self.store.borrow_mut();
        let team = store.create_team(data).map_err(js_error)?;
        Ok(team.id().to_string())
    }

    #[wasm_bindgen(js_name = selectProject)]
    pub fn select_project(&self, id: &str) -> Result<(), JsValue> {
        let id = Uuid::parse_str(id)
            .map_err(|_| js_error(StoreError::project_not_found(id)))?;
        self.store.borrow_mut().select_project(id).map_err(js_error)
    }

    /// Project cards as JSON, in creation order.
    #[wasm_bindgen(js_name = projectCards)]
    pub fn project_cards(&self) -> Result<String, JsValue> {
        let store = self.store.borrow();
        let cards: Vec<_> = store.projects().iter().map(ProjectCard::new).collect();
        serde_json::to_string(&cards).map_err(js_error)
    }

    /// Details of the current project as JSON, or `null` when none is selected.
    #[wasm_bindgen(js_name = currentDetails)]
    pub fn current_details(&self) -> Result<String, JsValue> {
        let store = self.store.borrow();
        let details = store.current_project().map(|project| {
            ProjectDetails::new(project, &store.teams_for_project(project.id()))
        });
        serde_json::to_string(&details).map_err(js_error)
    }

    /// Change the snapshot download name and remember it in localStorage.
    #[wasm_bindgen(js_name = setExportFileName)]
    pub fn set_export_file_name(&mut self, name: &str) -> Result<(), JsValue> {
        self.config.preferences.export_file_name = name.trim().to_string();
        self.config.save_to_local_storage().map_err(js_error)
    }

    /// Download all records as a snapshot file.
    #[wasm_bindgen(js_name = exportSnapshot)]
    pub fn export_snapshot(&self) -> Result<(), JsValue> {
        let json = self.store.borrow().export_json().map_err(js_error)?;
        let file_name = self.config.preferences.export_file_name_with_extension();
        wasm_file::download_text(&file_name, &json)
    }

    /// Let the user pick a snapshot file and import it. `on_done` is called
    /// with a summary of the import, one line per problem.
    #[wasm_bindgen(js_name = importSnapshot)]
    pub fn import_snapshot(&self, on_done: js_sys::Function) -> Result<(), JsValue> {
        let store = self.store.clone();
        wasm_file::open_json_picker(move |name, text| {
            let summary = match store.borrow_mut().import_snapshot(&text) {
                Ok(report) => report_summary(&report),
                Err(e) => {
                    log::error!("Failed to import {}: {}", name, e);
                    format!("Failed to import {}: {}", name, e)
                }
            };
            if let Err(e) = on_done.call1(&JsValue::NULL, &JsValue::from_str(&summary)) {
                log::error!("Import callback failed: {:?}", e);
            }
        })
    }
}

fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(js_error)
}

/// To-do bookmarks for the viewer side panel.
#[wasm_bindgen]
pub struct ToDoPanel {
    registry: ToDoRegistry,
}

#[wasm_bindgen]
impl ToDoPanel {
    /// Bind to the page's camera and highlighter objects and register the
    /// priority styles.
    #[wasm_bindgen(constructor)]
    pub fn new(camera: JsValue, highlighter: JsValue) -> Result<ToDoPanel, JsValue> {
        let preferences = AppConfig::load_from_local_storage()
            .unwrap_or_default()
            .preferences;
        let handles = ViewerHandles::new()
            .camera(JsCamera(camera))
            .highlighter(JsHighlighter(highlighter));
        let mut registry =
            ToDoRegistry::new(handles, preferences.registry_options()).map_err(js_error)?;
        registry.setup();
        Ok(ToDoPanel { registry })
    }

    /// Bookmark the current view. Returns the new to-do card as JSON.
    #[wasm_bindgen(js_name = addToDo)]
    pub fn add_to_do(&mut self, description: &str, priority: &str) -> Result<String, JsValue> {
        let priority: ToDoPriority = priority.parse().map_err(js_error)?;
        let todo = self
            .registry
            .add_to_do(description, priority)
            .map_err(js_error)?;
        serde_json::to_string(&ToDoCard::new(todo)).map_err(js_error)
    }

    pub fn restore(&mut self, id: &str) -> Result<(), JsValue> {
        self.registry.restore(parse_id(id)?).map_err(js_error)
    }

    #[wasm_bindgen(js_name = toggleColorize)]
    pub fn toggle_colorize(&mut self, active: bool) -> usize {
        self.registry.toggle_colorize(active)
    }

    #[wasm_bindgen(js_name = deleteToDo)]
    pub fn delete_to_do(&mut self, id: &str) -> Result<(), JsValue> {
        self.registry.delete_to_do(parse_id(id)?).map_err(js_error)
    }

    /// To-do cards as JSON, in creation order.
    pub fn cards(&self) -> Result<String, JsValue> {
        let cards: Vec<_> = self.registry.to_dos().iter().map(ToDoCard::new).collect();
        serde_json::to_string(&cards).map_err(js_error)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
