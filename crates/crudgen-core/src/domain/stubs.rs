//! Stub templates and their rendering context.
//!
//! Template content is data: `&'static str` constants with `{{VAR}}`
//! placeholders, one per artifact kind. The typed functions below are the only
//! way stubs are rendered. They take a [`NameVariants`] (plus a
//! [`RequestKind`] where relevant) and return the finished source text, which
//! keeps golden-output tests trivial.

use std::collections::HashMap;

use crate::domain::{NameVariants, RequestKind};

// ── StubContext ───────────────────────────────────────────────────────────────

/// Variable map used for `{{VAR}}` substitution.
///
/// Construction derives the standard variables from [`NameVariants`]; the
/// per-stub functions add whatever extras a template needs. Placeholders with
/// no matching variable are left untouched.
#[derive(Debug, Clone)]
pub struct StubContext {
    variables: HashMap<String, String>,
}

impl StubContext {
    /// Build a context carrying the standard naming variables.
    ///
    /// These are the contract between Crudgen and its templates: any stub may
    /// use `{{MODEL}}`, `{{STUDLY}}`, `{{STUDLY_PLURAL}}`, or
    /// `{{KEBAB_PLURAL}}` and expect them to resolve.
    pub fn new(variants: &NameVariants) -> Self {
        let mut variables = HashMap::new();
        variables.insert("MODEL".to_string(), variants.singular().to_string());
        variables.insert("STUDLY".to_string(), variants.studly().to_string());
        variables.insert(
            "STUDLY_PLURAL".to_string(),
            variants.studly_plural().to_string(),
        );
        variables.insert(
            "KEBAB_PLURAL".to_string(),
            variants.kebab_plural().to_string(),
        );
        Self { variables }
    }

    /// Add or override a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Look up a variable (testing helper).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{KEY}}` occurrence in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

// ── Templates ─────────────────────────────────────────────────────────────────

const CONTROLLER_STUB: &str = r#"<?php

namespace App\Http\Controllers;

use App\{{STUDLY}};
use Shortcodes\AbstractResourceController\Controllers\AbstractResourceController;

class {{STUDLY}}Controller extends AbstractResourceController
{
    protected $model = {{STUDLY}}::class;

    public function access()
    {
        $this->middleware('auth:sanctum');
    }
}
"#;

const REQUEST_STUB: &str = r#"<?php

namespace App\Http\Requests\{{STUDLY_PLURAL}};
{{USE}}
class {{KIND}}{{STUDLY}}Request extends {{EXTENDS}}
{
{{RULES}}}
"#;

const REQUEST_RULES_BLOCK: &str = r#"    public function rules()
    {
        return [
           //
        ];
    }
"#;

const REQUEST_TEST_STUB: &str = r#"<?php

namespace Tests\Feature\{{STUDLY}}\Requests;

use App\{{STUDLY}};
use App\Http\Requests\{{STUDLY_PLURAL}}\{{KIND}}{{STUDLY}}Request;
use Illuminate\Foundation\Testing\DatabaseTransactions;
use Shortcodes\Tests\Blueprints\FormRequestTest;

class {{KIND}}{{STUDLY}}RequestTest extends FormRequestTest
{
    use DatabaseTransactions;

    protected $model = {{KIND}}{{STUDLY}}Request::class;

    /**
     * @test
     */
    public function i_can_do()
    {
        $this->prepareRequest([
           //
        ])->assertValidRequest();
    }
}
"#;

const CRUD_TEST_STUB: &str = r#"<?php

namespace Tests\Feature\{{STUDLY}};

use App\{{STUDLY}};
use Illuminate\Foundation\Testing\DatabaseTransactions;
use Shortcodes\Tests\Blueprints\ApiCrudTest;

class Crud{{STUDLY}}Test extends ApiCrudTest
{
    use DatabaseTransactions;

    protected $model = {{STUDLY}}::class;
}
"#;

// ── Typed render functions ────────────────────────────────────────────────────

/// Resource-controller stub.
pub fn controller_stub(variants: &NameVariants) -> String {
    StubContext::new(variants).render(CONTROLLER_STUB)
}

/// Form-request stub for one kind.
///
/// `Update` extends the model's `Store` request and inherits its rules, so its
/// stub omits both the base-class import and the `rules()` block.
pub fn request_stub(kind: RequestKind, variants: &NameVariants) -> String {
    let context = StubContext::new(variants).with_var("KIND", kind.as_str());

    let context = match kind {
        RequestKind::Update => context
            .with_var("USE", "")
            .with_var("EXTENDS", format!("Store{}Request", variants.studly()))
            .with_var("RULES", ""),
        _ => context
            .with_var("USE", "\nuse Illuminate\\Foundation\\Http\\FormRequest;\n")
            .with_var("EXTENDS", "FormRequest")
            .with_var("RULES", REQUEST_RULES_BLOCK),
    };

    context.render(REQUEST_STUB)
}

/// Request-test stub for one tested kind.
pub fn request_test_stub(kind: RequestKind, variants: &NameVariants) -> String {
    StubContext::new(variants)
        .with_var("KIND", kind.as_str())
        .render(REQUEST_TEST_STUB)
}

/// Aggregate CRUD-test stub.
pub fn crud_test_stub(variants: &NameVariants) -> String {
    StubContext::new(variants).render(CRUD_TEST_STUB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelName;

    fn tag() -> NameVariants {
        NameVariants::derive(&ModelName::parse("tag").unwrap())
    }

    #[test]
    fn context_carries_standard_variables() {
        let ctx = StubContext::new(&tag());
        assert_eq!(ctx.get("MODEL"), Some("tag"));
        assert_eq!(ctx.get("STUDLY"), Some("Tag"));
        assert_eq!(ctx.get("STUDLY_PLURAL"), Some("Tags"));
        assert_eq!(ctx.get("KEBAB_PLURAL"), Some("tags"));
    }

    #[test]
    fn unknown_placeholders_are_left_untouched() {
        let ctx = StubContext::new(&tag());
        assert_eq!(ctx.render("{{STUDLY}} {{NOPE}}"), "Tag {{NOPE}}");
    }

    #[test]
    fn controller_stub_matches_golden_output() {
        let expected = r#"<?php

namespace App\Http\Controllers;

use App\Tag;
use Shortcodes\AbstractResourceController\Controllers\AbstractResourceController;

class TagController extends AbstractResourceController
{
    protected $model = Tag::class;

    public function access()
    {
        $this->middleware('auth:sanctum');
    }
}
"#;
        assert_eq!(controller_stub(&tag()), expected);
    }

    #[test]
    fn store_request_extends_the_base_request() {
        let stub = request_stub(RequestKind::Store, &tag());
        assert!(stub.contains("namespace App\\Http\\Requests\\Tags;"));
        assert!(stub.contains("use Illuminate\\Foundation\\Http\\FormRequest;"));
        assert!(stub.contains("class StoreTagRequest extends FormRequest"));
        assert!(stub.contains("public function rules()"));
    }

    #[test]
    fn update_request_extends_the_store_request() {
        let stub = request_stub(RequestKind::Update, &tag());
        assert!(stub.contains("class UpdateTagRequest extends StoreTagRequest"));
        assert!(!stub.contains("FormRequest"));
        assert!(!stub.contains("rules()"));
    }

    #[test]
    fn every_request_kind_renders_its_own_class() {
        for kind in RequestKind::ALL {
            let stub = request_stub(kind, &tag());
            assert!(stub.contains(&format!("class {kind}TagRequest")), "{kind}");
        }
    }

    #[test]
    fn request_test_stub_references_the_request_class() {
        let stub = request_test_stub(RequestKind::Delete, &tag());
        assert!(stub.contains("namespace Tests\\Feature\\Tag\\Requests;"));
        assert!(stub.contains("use App\\Http\\Requests\\Tags\\DeleteTagRequest;"));
        assert!(stub.contains("class DeleteTagRequestTest extends FormRequestTest"));
        assert!(stub.contains("protected $model = DeleteTagRequest::class;"));
    }

    #[test]
    fn crud_test_stub_matches_golden_output() {
        let expected = r#"<?php

namespace Tests\Feature\Tag;

use App\Tag;
use Illuminate\Foundation\Testing\DatabaseTransactions;
use Shortcodes\Tests\Blueprints\ApiCrudTest;

class CrudTagTest extends ApiCrudTest
{
    use DatabaseTransactions;

    protected $model = Tag::class;
}
"#;
        assert_eq!(crud_test_stub(&tag()), expected);
    }
}
