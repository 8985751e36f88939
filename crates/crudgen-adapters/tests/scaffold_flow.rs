//! End-to-end scaffolding runs against the in-memory adapters.

use std::path::Path;

use crudgen_adapters::{MemoryFilesystem, RecordingGenerator};
use crudgen_core::{
    application::{ScaffoldService, ports::Filesystem},
    domain::{ModelName, NameVariants, ProjectLayout, ScaffoldPlan},
};

fn variants(raw: &str) -> NameVariants {
    NameVariants::derive(&ModelName::parse(raw).unwrap())
}

fn service(fs: &MemoryFilesystem, generator: &RecordingGenerator) -> ScaffoldService {
    ScaffoldService::new(
        ProjectLayout::default(),
        Box::new(fs.clone()),
        Box::new(generator.clone()),
    )
}

#[test]
fn full_run_produces_the_expected_tree() {
    let fs = MemoryFilesystem::new();
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    let report = svc
        .scaffold(&variants("post"), ScaffoldPlan::everything())
        .unwrap();

    assert_eq!(report.created.len(), 10);
    assert!(report.skipped.is_empty());

    for path in [
        "app/Http/Controllers/PostController.php",
        "app/Http/Requests/Posts/StorePostRequest.php",
        "app/Http/Requests/Posts/UpdatePostRequest.php",
        "app/Http/Requests/Posts/DeletePostRequest.php",
        "app/Http/Requests/Posts/IndexPostRequest.php",
        "app/Http/Requests/Posts/ShowPostRequest.php",
        "tests/Feature/Post/Requests/StorePostRequest.php",
        "tests/Feature/Post/Requests/UpdatePostRequest.php",
        "tests/Feature/Post/Requests/DeletePostRequest.php",
        "tests/Feature/Post/CrudPostTest.php",
    ] {
        assert!(fs.exists(Path::new(path)), "missing {path}");
    }

    let controller = fs
        .read_file(Path::new("app/Http/Controllers/PostController.php"))
        .unwrap();
    assert!(controller.contains("class PostController extends AbstractResourceController"));

    let update = fs
        .read_file(Path::new("app/Http/Requests/Posts/UpdatePostRequest.php"))
        .unwrap();
    assert!(update.contains("class UpdatePostRequest extends StorePostRequest"));
}

#[test]
fn generator_calls_follow_the_artifact_order() {
    let fs = MemoryFilesystem::new();
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    svc.scaffold(&variants("post"), ScaffoldPlan::everything())
        .unwrap();

    assert_eq!(
        generator.calls(),
        [
            "make:model Post -m",
            "make:resource PostResource",
            "make:factory PostFactory --model=Post",
            "make:annotation Post",
        ]
    );
}

#[test]
fn pending_list_ends_with_the_route_registration() {
    let fs = MemoryFilesystem::new();
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    let report = svc
        .scaffold(&variants("user_profile"), ScaffoldPlan::everything())
        .unwrap();

    let last = report.pending.last().unwrap();
    assert_eq!(last.description, "add entry to route file (api.php)");
    assert_eq!(
        last.target,
        "Route::apiResource('user-profiles','UserProfileController');"
    );
}

#[test]
fn seeded_controller_is_skipped_once_and_other_artifacts_proceed() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("app/Http/Controllers/PostController.php", "<?php // mine");
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    let report = svc
        .scaffold(&variants("post"), ScaffoldPlan::everything())
        .unwrap();

    assert_eq!(
        report.skipped,
        [Path::new("app/Http/Controllers/PostController.php")]
    );
    assert_eq!(report.created.len(), 9);

    // The existing file was left untouched.
    let content = fs
        .read_file(Path::new("app/Http/Controllers/PostController.php"))
        .unwrap();
    assert_eq!(content, "<?php // mine");
}

#[test]
fn rerunning_skips_what_the_first_run_wrote() {
    let fs = MemoryFilesystem::new();
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    svc.scaffold(&variants("tag"), ScaffoldPlan::everything())
        .unwrap();
    let second = svc
        .scaffold(&variants("tag"), ScaffoldPlan::everything())
        .unwrap();

    // Controller, five requests, and the CRUD test are all probed under the
    // names the first run wrote, so they skip. The request-test stubs are
    // probed under a `…Test.php` name but written under `…Request.php`, so
    // they are rewritten every run.
    assert_eq!(second.skipped.len(), 7);
    assert_eq!(second.created.len(), 3);
}

#[test]
fn declined_steps_leave_no_trace() {
    let fs = MemoryFilesystem::new();
    let generator = RecordingGenerator::new();
    let svc = service(&fs, &generator);

    let report = svc
        .scaffold(&variants("post"), ScaffoldPlan::minimal())
        .unwrap();

    assert_eq!(report.created.len(), 1);
    assert!(!fs.exists(Path::new("app/Http/Requests/Posts")));
    assert!(!fs.exists(Path::new("tests/Feature/Post")));

    // Only the model, resource-route, controller, and swagger follow-ups remain.
    let descriptions: Vec<&str> = report
        .pending
        .iter()
        .map(|p| p.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        [
            "edit migration",
            "edit model",
            "edit controller (optional)",
            "edit swagger model",
            "add entry to route file (api.php)",
        ]
    );
}
