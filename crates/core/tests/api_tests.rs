//! Library API integration tests
use relink_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_rewrite_document_with_prefix() {
    let html = load_fixture("page.html");
    let mut doc = Document::parse(&html).expect("should parse");

    let changed = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
    assert!(changed > 0);

    let out = doc.as_string();
    assert!(out.contains(r#"href="https://mirror.example/about""#));
    assert!(out.contains(r#"href="https://mirror.example/docs/guide.html""#));
    assert!(out.contains(r#"href="https://mirror.example/css/site.css""#));
    assert!(out.contains(r#"src="https://mirror.example/img/logo.png""#));
    assert!(out.contains(r#"srcset="https://mirror.example/a.png 1x, https://mirror.example/b.png 2x""#));
    assert!(out.contains("url('https://mirror.example/img.png')"));
    assert!(out.contains("url(https://mirror.example/mask.svg)"));
    assert!(out.contains(r#"content="5;url=https://mirror.example/next;extra""#));
    assert!(out.contains(r#"action="https://mirror.example/submit""#));
    assert!(out.contains(r#"poster="https://mirror.example/poster.jpg""#));
    assert!(out.contains(r#"data-track="https://mirror.example/media/track.vtt""#));
}

#[test]
fn test_skip_rules_never_alter_candidates() {
    let html = load_fixture("page.html");
    let mut doc = Document::parse(&html).expect("should parse");

    doc.rewrite_links(Transform::prefix("https://mirror.example/"));

    let out = doc.as_string();
    assert!(out.contains(r##"href="#top""##));
    assert!(out.contains(r#"href="https://external.com/x""#));
    assert!(out.contains(r#"href="//cdn.com/lib.js""#));
    assert!(out.contains(r#"href="mailto:team@example.com""#));
}

#[test]
fn test_rewrite_is_idempotent_with_absolute_prefix() {
    let html = load_fixture("page.html");
    let mut doc = Document::parse(&html).expect("should parse");

    let first = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
    assert!(first > 0);

    let second = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
    assert_eq!(second, 0);
}

#[test]
fn test_rewrite_fragment_counts_attributes() {
    let html = load_fixture("fragment.html");
    let mut doc = Document::parse_fragment(&html).expect("should parse");

    // href + src + srcset + style; the srcset's two entries count once.
    assert_eq!(doc.rewrite_links(Transform::prefix("/p/")), 4);
}

#[test]
fn test_rewrite_with_callback_transform() {
    let html = load_fixture("fragment.html");
    let mut doc = Document::parse_fragment(&html).expect("should parse");

    let changed = doc.rewrite_links(Transform::callback(|url, ctx| {
        (ctx.tag == "a" && ctx.attr == "href").then(|| format!("/only-anchors{url}"))
    }));

    assert_eq!(changed, 1);
    let out = doc.as_string();
    assert!(out.contains(r#"href="/only-anchors/about""#));
    assert!(out.contains(r#"src="/img/logo.png""#));
}

#[test]
fn test_free_function_over_document() {
    let mut doc = Document::parse_fragment(r#"<a href="/a">a</a>"#).expect("should parse");
    assert_eq!(rewrite_links(&mut doc, Transform::prefix("/p/")), 1);
}

#[test]
fn test_declining_callback_leaves_document_unchanged() {
    let html = load_fixture("page.html");
    let mut doc = Document::parse(&html).expect("should parse");
    let before = doc.as_string();

    assert_eq!(doc.rewrite_links(Transform::callback(|_, _| None)), 0);
    assert_eq!(doc.as_string(), before);
}

#[test]
fn test_classifier_is_public_api() {
    assert!(is_rewritable("/about"));
    assert!(!is_rewritable("javascript:void(0)"));
}
