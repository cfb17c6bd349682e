use super::*;

#[test]
fn type_label_takes_iri_fragment() {
    assert_eq!(type_label("https://example.org/dmbon/ns/entity_types#Space"), "Space");
}

#[test]
fn type_label_takes_last_path_segment() {
    assert_eq!(type_label("https://example.org/types/Space/"), "Space");
    assert_eq!(type_label("Space"), "Space");
}

#[cfg(feature = "ssr")]
#[test]
fn card_renders_display_fields() {
    let summary = SpaceSummary::from_space(&serde_json::json!({
        "name": "Home",
        "RO_profile": "basic",
        "@type": "https://example.org/dmbon/ns/entity_types#Space",
        "url_space": "https://spaces.example.test/home",
    }));
    let html = Owner::new().with(|| view! { <SpaceCard summary=summary/> }.to_html());

    assert!(html.contains("Home"));
    assert!(html.contains("basic"));
    assert!(html.contains(">Space</span>"));
    assert!(html.contains("href=\"https://spaces.example.test/home\""));
    assert!(!html.contains("space-card__path"));
}
