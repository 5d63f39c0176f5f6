//! Plain-text rendering of a menu view for `sidenav groups --format text`.

use std::fmt::Write;

use sidenav_types::MenuView;

/// One header line per group followed by its routes, then settings and links.
pub fn render_text(view: &MenuView) -> String {
    let mut out = String::new();
    if view.is_loading {
        out.push_str("(api not ready; showing routes that need no api)\n");
    }
    for group in &view.groups {
        let _ = writeln!(out, "{}", group.name);
        for route in &group.routes {
            let _ = writeln!(out, "  {:<16} {}", route.name, route.label());
        }
    }
    if view.settings.is_some() || !view.external_links.is_empty() {
        out.push_str("--\n");
    }
    if let Some(settings) = &view.settings {
        let _ = writeln!(out, "  {:<16} {}", settings.name, settings.label());
    }
    for link in &view.external_links {
        let _ = writeln!(out, "  {:<16} {}", link.text, link.href);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidenav_types::{Group, RouteDescriptor};

    #[test]
    fn lists_groups_then_settings() {
        let view = MenuView {
            groups: vec![Group {
                id: "accounts".into(),
                name: "Accounts".into(),
                routes: vec![RouteDescriptor::new("accounts", "accounts").with_text("My accounts")],
            }],
            settings: Some(RouteDescriptor::new("settings", "settings")),
            external_links: Vec::new(),
            is_loading: true,
        };
        let text = render_text(&view);
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("(api not ready"));
        assert_eq!(lines[1], "Accounts");
        assert!(lines[2].contains("My accounts"));
        assert_eq!(lines[3], "--");
        assert!(lines[4].trim_start().starts_with("settings"));
    }
}
