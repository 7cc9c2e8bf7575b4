//! The record store: projects and teams in insertion order.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Project, ProjectData, ProjectRef, Team, TeamData};
use crate::store::error::StoreError;
use crate::store::report::{ImportFailure, ImportOptions, ImportReport, ImportWarning, RecordKind};
use crate::store::snapshot::{DecodedEntry, ProjectEntry, RawSnapshot, SnapshotDocument, TeamEntry};

/// Whether two teams may share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamNamePolicy {
    /// Any number of teams may share a name
    #[default]
    AllowDuplicates,
    /// A second team with the same name is rejected
    Unique,
}

/// Called whenever the current project changes, with the project and its teams.
pub type DetailsListener = Box<dyn FnMut(&Project, &[&Team])>;

/// Owns every project and team record.
///
/// Projects are unique by name. Creating or selecting a project makes it the
/// current project, which new teams are attached to by default.
#[derive(Default)]
pub struct RecordStore {
    projects: Vec<Project>,
    teams: Vec<Team>,
    current: Option<Uuid>,
    team_policy: TeamNamePolicy,
    details_listener: Option<DetailsListener>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("projects", &self.projects.len())
            .field("teams", &self.teams.len())
            .field("current", &self.current)
            .field("team_policy", &self.team_policy)
            .field("details_listener", &self.details_listener.is_some())
            .finish()
    }
}

impl RecordStore {
    /// Create an empty store that allows duplicate team names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a team-name policy.
    pub fn with_team_policy(team_policy: TeamNamePolicy) -> Self {
        Self {
            team_policy,
            ..Default::default()
        }
    }

    /// Register the callback that refreshes the project detail view.
    pub fn set_details_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Project, &[&Team]) + 'static,
    {
        self.details_listener = Some(Box::new(listener));
    }

    /// Current team-name policy.
    pub fn team_policy(&self) -> TeamNamePolicy {
        self.team_policy
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create a project and make it the current one.
    pub fn create_project(&mut self, data: ProjectData) -> Result<&Project, StoreError> {
        let project = Project::new(data)?;
        if self.project_by_name(&project.name).is_some() {
            return Err(StoreError::DuplicateName { name: project.name });
        }

        log::info!("Created project '{}' ({})", project.name, project.id());
        let index = self.projects.len();
        self.current = Some(project.id());
        self.projects.push(project);
        self.notify_details(index);
        Ok(&self.projects[index])
    }

    /// Create a team.
    ///
    /// A team whose data names no project is attached to the current project.
    pub fn create_team(&mut self, data: TeamData) -> Result<&Team, StoreError> {
        let project_id = match &data.project {
            Some(reference) => Some(self.resolve_project(reference)?),
            None => self.current,
        };
        self.insert_team(data, project_id)
    }

    fn insert_team(
        &mut self,
        data: TeamData,
        project_id: Option<Uuid>,
    ) -> Result<&Team, StoreError> {
        let team = Team::new(data, project_id)?;
        if self.team_policy == TeamNamePolicy::Unique
            && self.teams.iter().any(|existing| existing.name == team.name)
        {
            return Err(StoreError::DuplicateTeamName { name: team.name });
        }

        log::info!(
            "Created team '{}' ({}) for project {:?}",
            team.name,
            team.id(),
            team.project_id
        );
        let index = self.teams.len();
        self.teams.push(team);
        Ok(&self.teams[index])
    }

    fn resolve_project(&self, reference: &ProjectRef) -> Result<Uuid, StoreError> {
        match reference {
            ProjectRef::Id(id) => self
                .project(*id)
                .map(Project::id)
                .ok_or_else(|| StoreError::project_not_found(id)),
            ProjectRef::Name(name) => self
                .project_by_name(name)
                .map(Project::id)
                .ok_or_else(|| StoreError::project_not_found(name)),
        }
    }

    // ========================================================================
    // Selection and lookup
    // ========================================================================

    /// Make a project current and refresh the detail view.
    pub fn select_project(&mut self, id: Uuid) -> Result<&Project, StoreError> {
        let index = self
            .projects
            .iter()
            .position(|project| project.id() == id)
            .ok_or_else(|| StoreError::project_not_found(id))?;

        log::debug!("Selected project '{}'", self.projects[index].name);
        self.current = Some(id);
        self.notify_details(index);
        Ok(&self.projects[index])
    }

    /// The current project, if any.
    pub fn current_project(&self) -> Option<&Project> {
        self.current.and_then(|id| self.project(id))
    }

    /// Get a project by id.
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Get a project by exact (trimmed) name.
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        let name = name.trim();
        self.projects.iter().find(|project| project.name == name)
    }

    /// Get a team by id.
    pub fn team(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == id)
    }

    /// All projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All teams in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Teams attached to a project, in insertion order.
    pub fn teams_for_project(&self, project_id: Uuid) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|team| team.belongs_to(project_id))
            .collect()
    }

    /// Name of the project a team belongs to.
    pub fn team_project_name(&self, team: &Team) -> Option<&str> {
        team.project_id
            .and_then(|id| self.project(id))
            .map(|project| project.name.as_str())
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.teams.is_empty()
    }

    fn notify_details(&mut self, index: usize) {
        let Some(listener) = self.details_listener.as_mut() else {
            return;
        };
        let project = &self.projects[index];
        let teams: Vec<&Team> = self
            .teams
            .iter()
            .filter(|team| team.belongs_to(project.id()))
            .collect();
        listener(project, &teams);
    }

    // ========================================================================
    // Export/Import
    // ========================================================================

    /// Build a snapshot of every record.
    pub fn export_snapshot(&self) -> SnapshotDocument {
        SnapshotDocument {
            projects: self.projects.iter().map(ProjectEntry::from_project).collect(),
            teams: self
                .teams
                .iter()
                .map(|team| TeamEntry::from_team(team, self.team_project_name(team)))
                .collect(),
        }
    }

    /// Serialize a snapshot of every record to pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, StoreError> {
        let json = self.export_snapshot().to_json()?;
        log::info!(
            "Exported {} projects and {} teams",
            self.projects.len(),
            self.teams.len()
        );
        Ok(json)
    }

    /// Import a snapshot, creating every record it contains.
    ///
    /// Fails only when the document itself cannot be parsed. Individual
    /// records that fail are listed in the report and the rest are imported.
    pub fn import_snapshot(&mut self, json: &str) -> Result<ImportReport, StoreError> {
        self.import_snapshot_with(json, &ImportOptions::default())
    }

    /// Import a snapshot with options.
    pub fn import_snapshot_with(
        &mut self,
        json: &str,
        options: &ImportOptions,
    ) -> Result<ImportReport, StoreError> {
        let (projects, teams) = RawSnapshot::from_json(json)?.into_entries();
        Ok(self.import_entries(projects, teams, options))
    }

    /// Replay an already parsed snapshot through the create operations.
    pub fn import_document(
        &mut self,
        document: SnapshotDocument,
        options: &ImportOptions,
    ) -> ImportReport {
        let projects = document
            .projects
            .into_iter()
            .map(|entry| DecodedEntry::parsed(entry.project_name.clone(), entry))
            .collect();
        let teams = document
            .teams
            .into_iter()
            .map(|entry| DecodedEntry::parsed(entry.team_name.clone(), entry))
            .collect();
        self.import_entries(projects, teams, options)
    }

    fn import_entries(
        &mut self,
        projects: Vec<DecodedEntry<ProjectEntry>>,
        teams: Vec<DecodedEntry<TeamEntry>>,
        options: &ImportOptions,
    ) -> ImportReport {
        log::info!(
            "Importing snapshot with {} projects and {} teams",
            projects.len(),
            teams.len()
        );
        let mut report = ImportReport::new();

        if options.projects {
            for (index, DecodedEntry { name, entry }) in projects.into_iter().enumerate() {
                let created = entry
                    .and_then(|entry| entry.to_data())
                    .and_then(|data| self.create_project(data).map(|_| ()));
                match created {
                    Ok(()) => report.projects_imported += 1,
                    Err(error) => {
                        log::warn!("Skipping project #{}: {}", index, error);
                        report.failures.push(ImportFailure {
                            record: RecordKind::Project,
                            index,
                            name,
                            error,
                        });
                    }
                }
            }
        }

        if options.teams {
            for (index, DecodedEntry { name, entry }) in teams.into_iter().enumerate() {
                let created =
                    entry.and_then(|entry| self.import_team(&entry, index, &mut report));
                match created {
                    Ok(()) => report.teams_imported += 1,
                    Err(error) => {
                        log::warn!("Skipping team #{}: {}", index, error);
                        report.failures.push(ImportFailure {
                            record: RecordKind::Team,
                            index,
                            name,
                            error,
                        });
                    }
                }
            }
        }

        log::info!(
            "Imported {} projects and {} teams ({} failed)",
            report.projects_imported,
            report.teams_imported,
            report.failures.len()
        );
        report
    }

    /// Teams keep the project they name in the file; they are not attached to
    /// the current project. An unknown project name leaves the team unlinked.
    fn import_team(
        &mut self,
        entry: &TeamEntry,
        index: usize,
        report: &mut ImportReport,
    ) -> Result<(), StoreError> {
        let data = entry.to_data()?;
        let project_id = match &data.project {
            Some(reference) => match self.resolve_project(reference) {
                Ok(id) => Some(id),
                Err(error) => {
                    log::warn!("Team #{} imported without project: {}", index, error);
                    report.warnings.push(ImportWarning {
                        record: RecordKind::Team,
                        index,
                        message: format!("imported without project: {}", error),
                    });
                    None
                }
            },
            None => None,
        };
        self.insert_team(data, project_id)?;
        Ok(())
    }
}
