use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use zino_bootstrap::prelude::*;

fn position(html: &str, pattern: &str) -> usize {
    html.find(pattern)
        .unwrap_or_else(|| panic!("`{pattern}` not found in {html}"))
}

/// Renders an app and flushes the re-render scheduled by an error boundary.
fn render_app(app: fn() -> Element) -> String {
    let mut vdom = VirtualDom::new(app);
    vdom.rebuild_in_place();
    vdom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&vdom)
}

fn blank_id() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { "rejected" },
            Dropdown { id: "", label: "Actions" }
        }
    }
}

fn blank_label() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { "rejected" },
            Dropdown { id: "menu1", label: "  " }
        }
    }
}

fn valid_props() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { "rejected" },
            Dropdown { id: "menu1", label: "Actions" }
        }
    }
}

#[test]
fn it_renders_a_default_dropdown() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown { id: "menu1", label: "Actions" }
    });
    assert!(html.starts_with("<div"), "{html}");
    assert!(html.contains(r#"id="menu1" class="dropdown" data-bs-toggle="dropdown""#));
    assert!(html.contains(r##"id="menu1dropdown" class="dropdown-toggle btn" href="#""##));
    assert!(html.contains(">Actions</a>"));
    assert!(html.contains(
        r#"<ul class="dropdown-menu" data-bs-popper="static" aria-labelledby="menu1">"#
    ));
    assert!(!html.contains("<li"));
    assert!(!html.contains("dropdown-split"));
}

#[test]
fn it_renders_a_split_button_group() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "menu1",
            label: "Actions",
            wrapper: Wrapper::NavItem,
            split: true,
            color: Color::Primary,
        }
    });
    assert!(html.starts_with("<div"), "{html}");
    assert!(html.contains(r#"id="menu1" class="btn-group""#));
    assert!(html.contains(r#"id="menu1dropdown" class="btn btn-primary""#));
    assert!(html.contains(
        r#"id="menu1dropdown-split" class="btn dropdown-toggle dropdown-toggle-split btn-primary""#
    ));
    assert!(html.contains(r#"<span class="visually-hidden">Toggle Dropdown</span>"#));
    assert!(!html.contains(r##"href="#""##));

    let toggle = position(&html, r#"id="menu1dropdown""#);
    let split_toggle = position(&html, r#"id="menu1dropdown-split""#);
    let menu = position(&html, "<ul");
    assert!(toggle < split_toggle && split_toggle < menu);
}

#[test]
fn it_reverses_a_leftward_split_dropdown() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "menu1",
            label: "Actions",
            split: true,
            direction: Direction::Left,
        }
    });
    assert!(html.contains(r#"class="dropstart btn-group""#));

    let toggle = position(&html, r#"id="menu1dropdown""#);
    let split_toggle = position(&html, r#"id="menu1dropdown-split""#);
    let menu = position(&html, "<ul");
    assert!(split_toggle < menu && menu < toggle);
}

#[test]
fn it_renders_a_nav_item() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "more",
            label: "More",
            wrapper: Wrapper::NavItem,
            direction: Direction::Up,
            button: false,
            items: vec![
                rsx! { a { class: "dropdown-item", href: "/docs", "Docs" } },
                rsx! { a { class: "dropdown-item", href: "/blog", "Blog" } },
            ],
        }
    });
    assert!(html.starts_with("<li"), "{html}");
    assert!(html.contains(r#"id="more" class="nav-item dropup""#));
    assert!(html.contains(r#"id="moredropdown" class="dropdown-toggle nav-link""#));
    assert_eq!(html.matches(r#"<li><a class="dropdown-item""#).count(), 2);
    assert!(position(&html, "Docs") < position(&html, "Blog"));
}

#[test]
fn it_renders_raw_content_verbatim() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "search",
            label: "Search",
            wrapper: Wrapper::Raw,
            dark: true,
            items: vec![rsx! { "ignored" }],
            form {
                input { r#type: "text", name: "q" }
            }
        }
    });
    assert!(html.contains(
        r#"<div class="dropdown-menu dropdown-menu-dark" data-bs-popper="static" aria-labelledby="search"><form><input type="text" name="q""#
    ));
    assert!(!html.contains("<ul"));
    assert!(!html.contains("ignored"));
}

#[test]
fn it_ignores_the_default_slot_for_list_menus() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "menu1",
            label: "Actions",
            items: vec![rsx! { "first" }, rsx! { "second" }],
            span { "child" }
        }
    });
    assert!(html.contains(r#"aria-labelledby="menu1"><li>first</li><li>second</li></ul>"#));
    assert!(!html.contains("child"));
    assert!(!html.contains("<span"));
}

#[test]
fn it_appends_extra_root_classes() {
    let html = dioxus_ssr::render_element(rsx! {
        Dropdown {
            id: "menu1",
            label: "Actions",
            class: "dropdown shadow-sm",
            size: ButtonSize::Large,
            active: true,
        }
    });
    assert!(html.contains(r#"id="menu1" class="dropdown shadow-sm""#));
    assert!(html.contains(r#"class="dropdown-toggle active btn btn-lg""#));
}

#[test]
fn it_rejects_blank_required_properties() {
    let config = DropdownConfig::new("", "Actions");
    assert_eq!(config.validate(), Err(ConfigError::MissingField("id")));

    let config = DropdownConfig::new("menu1", "");
    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), Some("label"));
    assert_eq!(err.to_string(), "missing required property `label`");
}

#[test]
fn it_renders_the_error_fallback_for_blank_required_properties() {
    for app in [blank_id, blank_label] {
        let html = render_app(app);
        assert!(html.contains("rejected"), "{html}");
        assert!(!html.contains("data-bs-toggle"), "{html}");
        assert!(!html.contains("Actions"), "{html}");
    }

    let html = render_app(valid_props);
    assert!(!html.contains("rejected"), "{html}");
    assert!(html.contains(r#"id="menu1" class="dropdown""#), "{html}");
}
