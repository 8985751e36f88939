//! Output-path computation for every artifact kind.
//!
//! Paths follow the conventional Laravel tree: controllers, requests, and
//! resources live under the application root, feature tests under the test
//! root. Both roots are configurable so the tool can target projects with a
//! non-standard layout.

use std::path::{Path, PathBuf};

use crate::domain::{NameVariants, RequestKind};

/// Resolved directory roots of the host project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    app_root: PathBuf,
    tests_root: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new("app", "tests")
    }
}

impl ProjectLayout {
    pub fn new(app_root: impl Into<PathBuf>, tests_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
            tests_root: tests_root.into(),
        }
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    pub fn tests_root(&self) -> &Path {
        &self.tests_root
    }

    /// `app/Http/Controllers/{Studly}Controller.php`
    pub fn controller_path(&self, v: &NameVariants) -> PathBuf {
        self.app_root
            .join("Http/Controllers")
            .join(format!("{}Controller.php", v.studly()))
    }

    /// `app/Http/Requests/{StudlyPlural}`
    pub fn request_dir(&self, v: &NameVariants) -> PathBuf {
        self.app_root.join("Http/Requests").join(v.studly_plural())
    }

    /// `app/Http/Requests/{StudlyPlural}/{Kind}{Studly}Request.php`
    pub fn request_path(&self, kind: RequestKind, v: &NameVariants) -> PathBuf {
        self.request_dir(v)
            .join(format!("{}{}Request.php", kind, v.studly()))
    }

    /// `app/Http/Resources/{Studly}Resource.php`
    ///
    /// Only probed for existence; the resource class itself is produced by
    /// the framework generator.
    pub fn resource_path(&self, v: &NameVariants) -> PathBuf {
        self.app_root
            .join("Http/Resources")
            .join(format!("{}Resource.php", v.studly()))
    }

    /// `tests/Feature/{Studly}`
    pub fn feature_dir(&self, v: &NameVariants) -> PathBuf {
        self.tests_root.join("Feature").join(v.studly())
    }

    /// `tests/Feature/{Studly}/Requests`
    pub fn request_test_dir(&self, v: &NameVariants) -> PathBuf {
        self.feature_dir(v).join("Requests")
    }

    /// `tests/Feature/{Studly}/Requests/{Kind}{Studly}Test.php`: the name
    /// probed before a request-test stub is written.
    pub fn request_test_probe_path(&self, kind: RequestKind, v: &NameVariants) -> PathBuf {
        self.request_test_dir(v)
            .join(format!("{}{}Test.php", kind, v.studly()))
    }

    /// `tests/Feature/{Studly}/Requests/{Kind}{Studly}Request.php`: the name
    /// the request-test stub is actually written under.
    pub fn request_test_write_path(&self, kind: RequestKind, v: &NameVariants) -> PathBuf {
        self.request_test_dir(v)
            .join(format!("{}{}Request.php", kind, v.studly()))
    }

    /// `tests/Feature/{Studly}/Crud{Studly}Test.php`
    pub fn crud_test_path(&self, v: &NameVariants) -> PathBuf {
        self.feature_dir(v)
            .join(format!("Crud{}Test.php", v.studly()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelName;

    fn tag() -> NameVariants {
        NameVariants::derive(&ModelName::parse("tag").unwrap())
    }

    #[test]
    fn controller_path_uses_studly_name() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.controller_path(&tag()),
            PathBuf::from("app/Http/Controllers/TagController.php")
        );
    }

    #[test]
    fn request_paths_are_namespaced_by_plural() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.request_path(RequestKind::Store, &tag()),
            PathBuf::from("app/Http/Requests/Tags/StoreTagRequest.php")
        );
        assert_eq!(
            layout.request_path(RequestKind::Show, &tag()),
            PathBuf::from("app/Http/Requests/Tags/ShowTagRequest.php")
        );
    }

    #[test]
    fn test_paths_live_under_the_feature_dir() {
        let layout = ProjectLayout::default();
        assert_eq!(
            layout.crud_test_path(&tag()),
            PathBuf::from("tests/Feature/Tag/CrudTagTest.php")
        );
        assert_eq!(
            layout.request_test_probe_path(RequestKind::Update, &tag()),
            PathBuf::from("tests/Feature/Tag/Requests/UpdateTagTest.php")
        );
        assert_eq!(
            layout.request_test_write_path(RequestKind::Update, &tag()),
            PathBuf::from("tests/Feature/Tag/Requests/UpdateTagRequest.php")
        );
    }

    #[test]
    fn custom_roots_are_respected() {
        let layout = ProjectLayout::new("src/app", "src/tests");
        assert_eq!(
            layout.resource_path(&tag()),
            PathBuf::from("src/app/Http/Resources/TagResource.php")
        );
        assert_eq!(
            layout.feature_dir(&tag()),
            PathBuf::from("src/tests/Feature/Tag")
        );
    }
}
