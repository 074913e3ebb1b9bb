//! End-to-end license generation against the real adapters.

use std::path::{Path, PathBuf};

use licenseit_adapters::{
    AlwaysOverwrite, FixedAuthor, InMemoryStore, JsonConfigSource, LocalFilesystem,
    MemoryFilesystem, NeverOverwrite,
};
use licenseit_core::{
    application::{ApplicationError, LicenseRequest, LicenseService, ports::{Filesystem, OverwriteConfirm}},
    domain::DomainError,
    error::{ErrorCategory, LicenseitError},
};

fn mit_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store
        .insert("MIT.txt", "Copyright {date} {author}")
        .unwrap();
    store
}

fn no_config() -> Box<JsonConfigSource> {
    Box::new(JsonConfigSource::with_default_path("/nonexistent/licenseit/config.json"))
}

fn service_with(
    store: InMemoryStore,
    fs: &MemoryFilesystem,
    prompt: FixedAuthor,
    confirm: impl OverwriteConfirm + 'static,
) -> LicenseService {
    LicenseService::new(
        Box::new(store),
        Box::new(fs.clone()),
        no_config(),
        Box::new(prompt),
        Box::new(confirm),
    )
}

#[test]
fn scenario_a_writes_rendered_license() {
    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let generated = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane Doe")
                .with_date("2024"),
        )
        .unwrap();

    assert_eq!(generated.file_name, "MIT.txt");
    assert!(generated.path.ends_with("MIT.txt"));
    assert_eq!(
        fs.read_file(&PathBuf::from(".").join("MIT.txt")).as_deref(),
        Some("Copyright 2024 Jane Doe")
    );
}

#[test]
fn scenario_b_unknown_template_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let err = service
        .generate(&LicenseRequest::new("missing").with_author("Jane"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.to_string().contains("missing.txt"));
    assert!(fs.list_files().is_empty());
}

#[test]
fn scenario_c_blank_prompt_is_missing_author() {
    let fs = MemoryFilesystem::new();
    let service = service_with(
        mit_store(),
        &fs,
        FixedAuthor::new("   \n"),
        NeverOverwrite,
    );

    let err = service.generate(&LicenseRequest::new("MIT")).unwrap_err();

    assert_eq!(err.as_application(), Some(&ApplicationError::MissingAuthor));
    assert!(fs.list_files().is_empty());
}

#[test]
fn scenario_d_declined_overwrite_leaves_file_untouched() {
    let fs = MemoryFilesystem::new();
    fs.add_file(PathBuf::from(".").join("MIT.txt"), "original");
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let err = service
        .generate(&LicenseRequest::new("MIT").with_author("Jane"))
        .unwrap_err();

    assert!(matches!(
        err.as_application(),
        Some(ApplicationError::AbortedByUser { .. })
    ));
    assert_eq!(
        fs.read_file(&PathBuf::from(".").join("MIT.txt")).as_deref(),
        Some("original")
    );
}

#[test]
fn forced_overwrite_replaces_file() {
    let fs = MemoryFilesystem::new();
    fs.add_file(PathBuf::from(".").join("MIT.txt"), "original");
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), AlwaysOverwrite);

    service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane")
                .with_date("1999"),
        )
        .unwrap();

    assert_eq!(
        fs.read_file(&PathBuf::from(".").join("MIT.txt")).as_deref(),
        Some("Copyright 1999 Jane")
    );
}

#[test]
fn prompted_author_is_used_when_nothing_else_is_set() {
    let fs = MemoryFilesystem::new();
    let service = service_with(
        mit_store(),
        &fs,
        FixedAuthor::new("Prompted Person\n"),
        NeverOverwrite,
    );

    let generated = service
        .generate(&LicenseRequest::new("MIT").with_date("2024"))
        .unwrap();

    assert_eq!(generated.author.origin(), "prompt");
    assert_eq!(
        fs.read_file(&PathBuf::from(".").join("MIT.txt")).as_deref(),
        Some("Copyright 2024 Prompted Person")
    );
}

#[test]
fn config_file_supplies_author() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"author": "Config Author"}"#).unwrap();

    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let generated = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_config_path(&config)
                .with_date("2024"),
        )
        .unwrap();

    assert_eq!(generated.author.origin(), "config");
    assert!(
        fs.read_file(&PathBuf::from(".").join("MIT.txt"))
            .unwrap()
            .ends_with("Config Author")
    );
}

#[test]
fn explicit_author_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.json");
    std::fs::write(&config, "{ this is not json").unwrap();

    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let generated = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Flag Author")
                .with_config_path(&config),
        )
        .unwrap();

    assert_eq!(generated.author.origin(), "flag");
}

#[test]
fn broken_config_falls_through_to_prompt() {
    let fs = MemoryFilesystem::new();
    let service = service_with(
        mit_store(),
        &fs,
        FixedAuthor::new("Typed"),
        NeverOverwrite,
    );

    let generated = service
        .generate(&LicenseRequest::new("MIT").with_config_path("/no/such/config.json"))
        .unwrap();

    assert_eq!(generated.author.origin(), "prompt");
}

#[test]
fn output_directory_is_created() {
    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane")
                .with_directory("legal/licenses")
                .with_file_name("LICENSE"),
        )
        .unwrap();

    assert!(fs.exists(Path::new("legal/licenses")));
    assert!(fs.read_file(Path::new("legal/licenses/LICENSE")).is_some());
}

#[test]
fn write_failure_is_reported() {
    let fs = MemoryFilesystem::new();
    fs.set_read_only(true);
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let err = service
        .generate(&LicenseRequest::new("MIT").with_author("Jane"))
        .unwrap_err();

    assert!(matches!(
        err.as_application(),
        Some(ApplicationError::WriteFailed { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn file_in_place_of_directory_is_reported() {
    let fs = MemoryFilesystem::new();
    fs.add_file("docs", "not a directory");
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let err = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane")
                .with_directory("docs/legal"),
        )
        .unwrap_err();

    assert!(matches!(
        err.as_application(),
        Some(ApplicationError::DirectoryCreation { .. })
    ));
    assert_eq!(fs.list_files(), vec![PathBuf::from("docs")]);
}

#[test]
fn path_like_template_name_is_rejected() {
    let fs = MemoryFilesystem::new();
    let service = service_with(mit_store(), &fs, FixedAuthor::blank(), NeverOverwrite);

    let err = service
        .generate(&LicenseRequest::new("../MIT").with_author("Jane"))
        .unwrap_err();

    assert!(matches!(
        err,
        LicenseitError::Domain(DomainError::InvalidBaseName { .. })
    ));
}

#[test]
fn bundled_templates_resolve_by_base_name() {
    let fs = MemoryFilesystem::new();
    let service = service_with(
        InMemoryStore::with_builtin().unwrap(),
        &fs,
        FixedAuthor::blank(),
        NeverOverwrite,
    );

    let md = service
        .plan(&LicenseRequest::new("MIT-0").with_author("Jane"))
        .unwrap();
    assert_eq!(md.target.file_name(), "MIT-0.md");

    let apache = service
        .plan(
            &LicenseRequest::new("Apache-2.0")
                .with_author("Jane Doe")
                .with_date("2024"),
        )
        .unwrap();
    assert!(apache.content.contains("Copyright 2024 Jane Doe"));
    assert!(!apache.content.contains("{author}"));
}

#[test]
fn local_filesystem_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let service = LicenseService::new(
        Box::new(mit_store()),
        Box::new(LocalFilesystem::new()),
        no_config(),
        Box::new(FixedAuthor::blank()),
        Box::new(NeverOverwrite),
    );

    let generated = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane Doe")
                .with_date("2024")
                .with_directory(dir.path().join("out")),
        )
        .unwrap();

    assert!(generated.path.is_absolute());
    assert_eq!(
        std::fs::read_to_string(&generated.path).unwrap(),
        "Copyright 2024 Jane Doe"
    );
}

#[test]
fn local_directory_blocked_by_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let service = LicenseService::new(
        Box::new(mit_store()),
        Box::new(LocalFilesystem::new()),
        no_config(),
        Box::new(FixedAuthor::blank()),
        Box::new(NeverOverwrite),
    );

    let err = service
        .generate(
            &LicenseRequest::new("MIT")
                .with_author("Jane")
                .with_directory(blocker.join("sub")),
        )
        .unwrap_err();

    assert!(matches!(
        err.as_application(),
        Some(ApplicationError::DirectoryCreation { .. })
    ));
}
