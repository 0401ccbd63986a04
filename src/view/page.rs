//! Standalone HTML page showing the list and the detail pane.

use minijinja::{Environment, context};

use super::model::Screen;

/// Page template. Autoescaping is on (the name ends in `.html`); only the
/// rendered preview is inserted raw.
pub const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ screen.detail.title }}</title>
    <style>{{ theme_css|safe }}</style>
</head>
<body>
    <nav id="list">
        {% for entry in screen.list %}<div class="entry{% if entry.active %} active{% endif %}" data-id="{{ entry.id }}">{{ entry.title }}</div>
        {% endfor %}
    </nav>
    <main id="detail" class="{{ screen.mode }}">
        <input id="memoTitle" value="{{ screen.detail.title }}"{% if not screen.detail.editable %} disabled{% endif %}>
        <div class="buttons">
            <button id="edit"{% if not screen.detail.show_edit %} hidden{% endif %}>edit</button>
            <button id="save"{% if not screen.detail.show_save %} hidden{% endif %}>save</button>
        </div>
        {% if screen.detail.editable %}
        <textarea id="memoBody">{{ screen.detail.body }}</textarea>
        {% else %}
        <article id="previewBody">{{ screen.detail.preview|safe }}</article>
        {% endif %}
        <div class="metadata">Updated <time datetime="{{ screen.detail.updated_at }}">{{ updated }}</time></div>
    </main>
</body>
</html>"##;

/// Light theme for the page.
pub const THEME_CSS: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    display: flex;
    margin: 0;
    color: #333;
}
#list { width: 16rem; border-right: 1px solid #eee; min-height: 100vh; }
#list .entry { padding: 0.5rem 1rem; cursor: pointer; }
#list .entry.active { background: #eef; font-weight: bold; }
#detail { flex: 1; padding: 1rem 2rem; }
#memoTitle { font-size: 1.5em; width: 100%; border: none; background: transparent; }
#memoBody { width: 100%; min-height: 60vh; font-family: monospace; }
pre { background: #f5f5f5; padding: 1rem; overflow-x: auto; border-radius: 4px; }
blockquote { border-left: 3px solid #ddd; margin-left: 0; padding-left: 1rem; color: #666; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 0.5rem; }
.metadata { color: #666; font-size: 0.9em; margin-top: 1rem; }
"#;

/// Renders `screen` to a complete HTML document.
pub fn render_page(screen: &Screen) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    let tmpl = env.get_template("page.html")?;

    tmpl.render(context! {
        screen => screen,
        theme_css => THEME_CSS,
        updated => screen.detail.updated_at.format("%Y-%m-%d %H:%M").to_string(),
    })
}
