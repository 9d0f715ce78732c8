use chrono::{TimeDelta, TimeZone, Utc};
use projlinks_core::db::{open_db, open_db_in_memory};
use projlinks_core::repo::project_repo::{decode_projects, encode_projects};
use projlinks_core::{
    AppMetadata, ManualClock, MemorySlotStorage, ProjectId, ProjectRepository, ProjectStore,
    RepoError, RepoResult, SlotProjectRepository, SlotStorage, SqliteSlotStorage, StoreError,
};
use projlinks_core::{Clock, LinkId, Project};

const KEY: &str = "projectLinks";

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 9, 20, 10, 0, 0).unwrap())
}

fn persisted(storage: &MemorySlotStorage) -> Vec<Project> {
    decode_projects(&storage.get_slot(KEY).unwrap().unwrap()).unwrap()
}

#[test]
fn empty_storage_is_seeded_once_with_demo_projects() {
    let storage = MemorySlotStorage::new();
    let clock = clock();

    let store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        &clock,
        AppMetadata::default(),
    )
    .unwrap();
    let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Web Development Resources", "Design Inspiration"]);
    assert_eq!(persisted(&storage).len(), 2);

    let mut store = store;
    store.create_project("Mine").unwrap();
    drop(store);

    let reopened = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        &clock,
        AppMetadata::default(),
    )
    .unwrap();
    assert_eq!(reopened.projects().len(), 3);
}

#[test]
fn corrupt_storage_is_treated_as_absent_and_reseeded() {
    let storage = MemorySlotStorage::with_slot(KEY, "[{\"id\":");
    let store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();

    assert_eq!(store.projects().len(), 2);
    assert_eq!(persisted(&storage)[0].id(), &ProjectId::from("demo1"));
}

#[test]
fn duplicate_or_blank_project_names_are_rejected_without_change() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();
    let before = store.projects().to_vec();

    let err = store.create_project("Design Inspiration").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateProjectName(_)));
    assert_eq!(err.user_message(), "A project with this name already exists");

    let err = store.create_project("   ").unwrap_err();
    assert!(matches!(err, StoreError::EmptyProjectName));

    assert_eq!(store.projects(), before.as_slice());
    assert_eq!(persisted(&storage), before);

    // exact match only: case differs, so this is a new project
    store.create_project("design inspiration").unwrap();
    assert_eq!(store.projects().len(), 3);
}

#[test]
fn created_project_name_is_trimmed() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();

    let project = store.create_project("  Reading list ").unwrap();
    assert_eq!(project.name, "Reading list");
    assert!(project.links.is_empty());
    assert!(matches!(
        store.create_project("Reading list"),
        Err(StoreError::DuplicateProjectName(_))
    ));
}

#[test]
fn duplicate_link_url_is_rejected_and_count_unchanged() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();
    let demo1 = ProjectId::from("demo1");

    let err = store
        .add_link(&demo1, "https://github.com", Some("Again"))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUrl(_)));
    assert_eq!(store.project(&demo1).unwrap().link_count(), 3);
    assert_eq!(persisted(&storage)[0].link_count(), 3);
}

#[test]
fn add_link_derives_title_and_ignores_unknown_project() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();

    let link = store
        .add_link(&ProjectId::from("demo2"), "https://www.example.com/page", None)
        .unwrap()
        .unwrap();
    assert_eq!(link.title, "Example.com");
    assert_eq!(link.updated_at, None);
    assert_eq!(persisted(&storage)[1].links.last(), Some(&link));

    let missing = store
        .add_link(&ProjectId::from("nope"), "https://x.com", None)
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn add_link_rejects_invalid_urls() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();
    let demo1 = ProjectId::from("demo1");

    assert!(matches!(
        store.add_link(&demo1, "ftp://x.com", None),
        Err(StoreError::InvalidUrl(_))
    ));
    assert!(matches!(
        store.add_link(&demo1, "  ", None),
        Err(StoreError::EmptyUrl)
    ));
}

#[test]
fn deleting_project_cascades_links_in_persisted_state() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();

    assert!(store.delete_project(&ProjectId::from("demo1")).unwrap());
    let saved = persisted(&storage);
    assert_eq!(saved.len(), 1);
    assert!(saved
        .iter()
        .flat_map(|project| &project.links)
        .all(|link| link.id() != &LinkId::from("link1")));

    assert!(!store.delete_project(&ProjectId::from("demo1")).unwrap());
}

#[test]
fn delete_link_removes_only_the_named_link() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();
    let demo1 = ProjectId::from("demo1");

    assert!(store.delete_link(&demo1, &LinkId::from("link2")).unwrap());
    assert!(!store.delete_link(&demo1, &LinkId::from("link2")).unwrap());
    let urls: Vec<String> = persisted(&storage)[0]
        .links
        .iter()
        .map(|link| link.url.clone())
        .collect();
    assert_eq!(
        urls,
        [
            "https://developer.mozilla.org/en-US/docs/Web",
            "https://github.com"
        ]
    );
}

#[test]
fn edit_link_rejects_other_links_url_but_accepts_its_own() {
    let storage = MemorySlotStorage::new();
    let clock = clock();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        &clock,
        AppMetadata::default(),
    )
    .unwrap();
    let demo1 = ProjectId::from("demo1");
    let link3 = LinkId::from("link3");

    let err = store
        .edit_link(&demo1, &link3, "https://stackoverflow.com", None)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateUrl(_)));
    assert_eq!(store.project(&demo1).unwrap().link(&link3).unwrap().updated_at, None);

    clock.advance(TimeDelta::minutes(5));
    let edited = store
        .edit_link(&demo1, &link3, "https://github.com", Some("GitHub Home"))
        .unwrap();
    assert_eq!(edited.title, "GitHub Home");
    assert_eq!(edited.id(), &link3);
    assert_eq!(edited.updated_at, Some(clock.now()));
    assert_eq!(persisted(&storage)[0].links[2], edited);
}

#[test]
fn edit_link_validates_url_and_targets() {
    let storage = MemorySlotStorage::new();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(&storage, KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();
    let demo1 = ProjectId::from("demo1");

    assert!(matches!(
        store.edit_link(&demo1, &LinkId::from("link1"), "", None),
        Err(StoreError::EmptyUrl)
    ));
    assert!(matches!(
        store.edit_link(&demo1, &LinkId::from("link1"), "mailto:a@b.c", None),
        Err(StoreError::InvalidUrl(_))
    ));
    assert!(matches!(
        store.edit_link(&demo1, &LinkId::from("missing"), "https://a.dev", None),
        Err(StoreError::LinkNotFound(_))
    ));
    assert!(matches!(
        store.edit_link(&ProjectId::from("x"), &LinkId::from("link1"), "https://a.dev", None),
        Err(StoreError::ProjectNotFound(_))
    ));

    let edited = store
        .edit_link(&demo1, &LinkId::from("link1"), "https://www.w3.org/", Some(" "))
        .unwrap();
    assert_eq!(edited.title, "W3.org");
}

#[test]
fn save_and_load_round_trip_preserves_structure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projlinks.sqlite3");
    let clock = clock();

    let expected = {
        let conn = open_db(&path).unwrap();
        let mut store = ProjectStore::open(
            SlotProjectRepository::new(SqliteSlotStorage::new(&conn), KEY),
            &clock,
            AppMetadata::default(),
        )
        .unwrap();
        let project = store.create_project("Round trip").unwrap();
        clock.advance(TimeDelta::milliseconds(1234));
        store
            .add_link(project.id(), "https://a.dev/x", Some("A"))
            .unwrap();
        store
            .edit_link(
                &ProjectId::from("demo2"),
                &LinkId::from("link5"),
                "https://www.behance.net",
                None,
            )
            .unwrap();
        store.projects().to_vec()
    };

    let conn = open_db(&path).unwrap();
    let repo = SlotProjectRepository::new(SqliteSlotStorage::new(&conn), KEY);
    let loaded = repo.load_projects().unwrap();
    assert_eq!(loaded, expected);

    let reencoded = decode_projects(&encode_projects(&loaded).unwrap()).unwrap();
    assert_eq!(reencoded, expected);
}

struct FailingRepo {
    inner: SlotProjectRepository<MemorySlotStorage>,
    fail_saves: std::cell::Cell<bool>,
}

impl ProjectRepository for FailingRepo {
    fn load_projects(&self) -> RepoResult<Vec<Project>> {
        self.inner.load_projects()
    }

    fn save_projects(&self, projects: &[Project]) -> RepoResult<()> {
        if self.fail_saves.get() {
            let conn_err = rusqlite::Error::QueryReturnedNoRows;
            return Err(RepoError::from(conn_err));
        }
        self.inner.save_projects(projects)
    }
}

#[test]
fn failed_save_commits_nothing_in_memory() {
    let repo = FailingRepo {
        inner: SlotProjectRepository::new(MemorySlotStorage::new(), KEY),
        fail_saves: std::cell::Cell::new(false),
    };
    let mut store = ProjectStore::open(repo, clock(), AppMetadata::default()).unwrap();
    store.repo().fail_saves.set(true);

    let err = store.create_project("Unsaved").unwrap_err();
    assert!(matches!(err, StoreError::Repo(_)));
    assert_eq!(store.projects().len(), 2);

    assert!(store.delete_project(&ProjectId::from("demo1")).is_err());
    assert!(store.project(&ProjectId::from("demo1")).is_some());
}

#[test]
fn export_all_fails_when_no_projects_remain() {
    let conn = open_db_in_memory().unwrap();
    let mut store = ProjectStore::open(
        SlotProjectRepository::new(SqliteSlotStorage::new(&conn), KEY),
        clock(),
        AppMetadata::default(),
    )
    .unwrap();

    assert_eq!(
        store.export_all_projects().unwrap().filename,
        "all_projects_links.json"
    );
    store.delete_project(&ProjectId::from("demo1")).unwrap();
    store.delete_project(&ProjectId::from("demo2")).unwrap();

    let err = store.export_all_projects().unwrap_err();
    assert!(matches!(err, StoreError::NothingToExport));
    assert_eq!(err.user_message(), "No projects to export");
    assert!(store.export_project(&ProjectId::from("demo1")).unwrap().is_none());
}
