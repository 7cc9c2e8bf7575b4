//! Tests for the snapshot document and best-effort import.

use chrono::NaiveDate;

use crate::model::{ProjectData, ProjectStatus, ProjectType, TeamData, TeamRole};
use crate::store::{
    ImportOptions, RecordKind, RecordStore, SnapshotDocument, StoreError, TeamNamePolicy,
};

/// Create a store with two projects and three teams.
fn create_populated_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .create_project(
            ProjectData::new("Tower A")
                .with_description("Office tower")
                .with_status(ProjectStatus::Active)
                .with_type(ProjectType::Commercial)
                .with_cost("1500000")
                .with_address("1 Main St")
                .with_finish_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
                .with_progress(40),
        )
        .unwrap();
    store
        .create_team(
            TeamData::new("Acme Steel", TeamRole::Structural).with_contact("Ana", "555-0101"),
        )
        .unwrap();
    store
        .create_project(
            ProjectData::new("Depot")
                .with_status(ProjectStatus::Pending)
                .with_type(ProjectType::HeavyCivil),
        )
        .unwrap();
    store
        .create_team(TeamData::new("Pipes Inc", TeamRole::Mep))
        .unwrap();
    store
        .create_team(TeamData::new("Acme Steel", TeamRole::Contractor))
        .unwrap();
    store
}

#[test]
fn test_export_shape() {
    let store = create_populated_store();
    let json = store.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let projects = value["projects"].as_array().unwrap();
    let teams = value["teams"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(teams.len(), 3);

    let tower = &projects[0];
    assert_eq!(tower["projectName"], "Tower A");
    assert_eq!(tower["projectStatus"], "Active");
    assert_eq!(tower["projectType"], "Commercial");
    assert_eq!(tower["projectCost"], "1500000");
    assert_eq!(tower["projectFinishDate"], "2025-06-30");
    assert_eq!(tower["projectProgress"], "40");
    assert_eq!(projects[1]["projectType"], "Heavy civil");
    assert_eq!(projects[1]["projectFinishDate"], "");

    assert_eq!(teams[0]["teamName"], "Acme Steel");
    assert_eq!(teams[0]["teamRole"], "Structural");
    assert_eq!(teams[0]["contactPhone"], "555-0101");
    assert_eq!(teams[0]["teamProject"], "Tower A");
    assert_eq!(teams[1]["teamProject"], "Depot");
}

#[test]
fn test_unlinked_team_omits_project() {
    let mut store = RecordStore::new();
    store
        .create_team(TeamData::new("Solo", TeamRole::Architect))
        .unwrap();

    let json = store.export_json().unwrap();
    assert!(!json.contains("teamProject"));
}

#[test]
fn test_export_import_roundtrip() {
    let original = create_populated_store();
    let json = original.export_json().unwrap();

    let mut restored = RecordStore::new();
    let report = restored.import_snapshot(&json).unwrap();

    assert!(!report.has_failures());
    assert!(!report.has_warnings());
    assert_eq!(report.projects_imported, 2);
    assert_eq!(report.teams_imported, 3);

    for (before, after) in original.projects().iter().zip(restored.projects()) {
        assert_ne!(before.id(), after.id());
        assert_eq!(before.to_data(), after.to_data());
    }
    for (before, after) in original.teams().iter().zip(restored.teams()) {
        assert_ne!(before.id(), after.id());
        assert_eq!(before.name, after.name);
        assert_eq!(before.role, after.role);
        assert_eq!(before.contact_name, after.contact_name);
        assert_eq!(
            original.team_project_name(before),
            restored.team_project_name(after)
        );
    }

    // Documents written from either store are identical
    assert_eq!(original.export_snapshot(), restored.export_snapshot());
}

#[test]
fn test_import_does_not_link_to_current_project() {
    let mut store = RecordStore::new();
    let json = r#"{
        "projects": [{ "projectName": "Tower A", "projectStatus": "Active", "projectType": "Residential" }],
        "teams": [{ "teamName": "Solo", "teamRole": "MEP" }]
    }"#;

    store.import_snapshot(json).unwrap();
    assert_eq!(store.teams()[0].project_id, None);
}

#[test]
fn test_import_reports_failures_and_continues() {
    let mut store = RecordStore::new();
    store
        .create_project(ProjectData::new("Tower A"))
        .unwrap();

    let json = r#"{
        "projects": [
            { "projectName": "Tower A", "projectStatus": "Active", "projectType": "Residential" },
            { "projectName": "Bridge", "projectStatus": "Someday", "projectType": "Heavy civil" },
            { "projectName": "Depot", "projectStatus": "Pending", "projectType": "Industrial" }
        ],
        "teams": [
            { "teamName": "Acme", "teamRole": "Plumbers" },
            { "teamName": "Beta", "teamRole": "Architect", "teamProject": "Depot" }
        ]
    }"#;

    let report = store.import_snapshot(json).unwrap();

    assert_eq!(report.projects_imported, 1);
    assert_eq!(report.teams_imported, 1);
    assert_eq!(report.failures.len(), 3);

    let first = &report.failures[0];
    assert_eq!(first.record, RecordKind::Project);
    assert_eq!(first.index, 0);
    assert!(matches!(first.error, StoreError::DuplicateName { .. }));

    let second = &report.failures[1];
    assert_eq!(second.name, "Bridge");
    assert!(matches!(
        second.error,
        StoreError::InvalidRecord { field: "projectStatus", .. }
    ));

    let third = &report.failures[2];
    assert_eq!(third.record, RecordKind::Team);
    assert!(matches!(
        third.error,
        StoreError::InvalidRecord { field: "teamRole", .. }
    ));

    assert_eq!(store.projects().len(), 2);
    let depot = store.project_by_name("Depot").unwrap().id();
    assert_eq!(store.teams_for_project(depot).len(), 1);

    let messages = report.failure_messages();
    assert!(messages[0].contains("already exists"));
}

#[test]
fn test_import_unknown_team_project_is_a_warning() {
    let mut store = RecordStore::new();
    let json = r#"{ "teams": [{ "teamName": "Acme", "teamRole": "Contractor", "teamProject": "Ghost" }] }"#;

    let report = store.import_snapshot(json).unwrap();

    assert_eq!(report.teams_imported, 1);
    assert!(!report.has_failures());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("Ghost"));
    assert_eq!(store.teams()[0].project_id, None);
}

#[test]
fn test_import_unique_team_policy() {
    let mut store = RecordStore::with_team_policy(TeamNamePolicy::Unique);
    let json = r#"{ "teams": [
        { "teamName": "Acme", "teamRole": "Contractor" },
        { "teamName": "Acme", "teamRole": "MEP" }
    ] }"#;

    let report = store.import_snapshot(json).unwrap();
    assert_eq!(report.teams_imported, 1);
    assert!(matches!(
        report.failures[0].error,
        StoreError::DuplicateTeamName { .. }
    ));
}

#[test]
fn test_import_malformed_document_fails_whole() {
    let mut store = RecordStore::new();

    let err = store.import_snapshot("{ not json").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));

    let err = store.import_snapshot(r#"{ "projects": 5 }"#).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));

    assert!(store.is_empty());
}

#[test]
fn test_import_missing_arrays_are_empty() {
    let mut store = RecordStore::new();
    let report = store.import_snapshot("{}").unwrap();
    assert_eq!(report.imported(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_import_accepts_browser_written_values() {
    let mut store = RecordStore::new();
    let json = r#"{
        "projects": [{
            "projectName": "Tower A",
            "projectStatus": "Finished",
            "projectType": "Mixed-use",
            "projectCost": 2500,
            "projectFinishDate": "2024-05-01T00:00:00.000Z",
            "projectProgress": 100
        }, {
            "projectName": "Shed",
            "projectStatus": "Pending",
            "projectType": "Residential",
            "projectFinishDate": null
        }]
    }"#;

    let report = store.import_snapshot(json).unwrap();
    assert!(!report.has_failures());

    let tower = store.project_by_name("Tower A").unwrap();
    assert_eq!(tower.project_type, ProjectType::MixedUse);
    assert_eq!(tower.cost, "2500");
    assert_eq!(tower.finish_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    assert_eq!(tower.progress, 100);

    let shed = store.project_by_name("Shed").unwrap();
    assert_eq!(shed.finish_date, None);
    assert_eq!(shed.progress, 0);
}

#[test]
fn test_import_options_filter_arrays() {
    let json = create_populated_store().export_json().unwrap();

    let mut projects_only = RecordStore::new();
    let report = projects_only
        .import_snapshot_with(&json, &ImportOptions::new().teams(false))
        .unwrap();
    assert_eq!(report.projects_imported, 2);
    assert_eq!(report.teams_imported, 0);
    assert!(projects_only.teams().is_empty());

    let mut teams_only = RecordStore::new();
    let report = teams_only
        .import_snapshot_with(&json, &ImportOptions::new().projects(false))
        .unwrap();
    assert_eq!(report.teams_imported, 3);
    assert_eq!(report.warnings.len(), 3);
}

#[test]
fn test_document_record_count() {
    let document = create_populated_store().export_snapshot();
    assert_eq!(document.record_count(), 5);
    assert_eq!(SnapshotDocument::new().record_count(), 0);

    let parsed = SnapshotDocument::from_json(&document.to_json().unwrap()).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_import_malformed_record_fails_alone() {
    let documents = [
        (
            r#"{ "projects": [{ "projectName": "Good" }],
                 "teams": [{ "teamName": "Acme", "teamRole": "MEP", "teamProject": { "id": 1 } }] }"#,
            RecordKind::Team,
            0,
            "Acme",
        ),
        (
            r#"{ "projects": [5, { "projectName": "Good" }] }"#,
            RecordKind::Project,
            0,
            "",
        ),
        (
            r#"{ "projects": [{ "projectName": "Good" }, { "projectName": ["x"] }] }"#,
            RecordKind::Project,
            1,
            "",
        ),
    ];

    for (json, record, index, name) in documents {
        let mut store = RecordStore::new();
        let report = store.import_snapshot(json).unwrap();

        assert_eq!(report.projects_imported, 1, "{}", json);
        assert!(store.project_by_name("Good").is_some());
        assert_eq!(report.failures.len(), 1);

        let failure = &report.failures[0];
        assert_eq!(failure.record, record);
        assert_eq!(failure.index, index);
        assert_eq!(failure.name, name);
        assert!(matches!(failure.error, StoreError::Parse(_)));
    }
}

#[test]
fn test_import_numeric_team_project_is_a_name() {
    let mut store = RecordStore::new();
    let json = r#"{
        "projects": [{ "projectName": "7" }],
        "teams": [
            { "teamName": "Acme", "teamRole": "MEP", "teamProject": 7 },
            { "teamName": "Solo", "teamRole": "Architect", "teamProject": null }
        ]
    }"#;

    let report = store.import_snapshot(json).unwrap();

    assert_eq!(report.teams_imported, 2);
    assert!(!report.has_failures());
    assert!(!report.has_warnings());
    let project = store.project_by_name("7").unwrap().id();
    assert_eq!(store.teams()[0].project_id, Some(project));
    assert_eq!(store.teams()[1].project_id, None);
}

#[test]
fn test_import_parsed_document() {
    let document = create_populated_store().export_snapshot();
    let mut store = RecordStore::new();

    let report = store.import_document(document.clone(), &ImportOptions::default());

    assert_eq!(report.imported(), document.record_count());
    assert_eq!(store.export_snapshot(), document);
}
