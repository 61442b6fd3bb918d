//! Fragment renderer - converts grid form elements to HTML via Tera.
//!
//! Templates are resolved by name so a host theme can override them; when a
//! name is missing from the Tera instance the renderer falls back to built-in
//! inline markup.

use anyhow::Context as _;
use tera::{Context as TeraContext, Tera};

use crate::error::GridResult;
use crate::form::{FieldType, FormAction, GridFormField};
use crate::theme::html_escape;

/// Template name for the add-child fragment (selector + button).
pub const ADD_CHILD_TEMPLATE: &str = "grid/add-child.html";

/// Template suggestion for the selector's field holder.
pub const ADD_CHILD_HOLDER_TEMPLATE: &str = "grid/add-child-holder.html";

/// Template name for the view-link column cell.
pub const VIEW_LINK_TEMPLATE: &str = "grid/view-link.html";

const DEFAULT_ADD_CHILD: &str = r#"{% if field.title %}<label class="grid-add-child__label" for="{{ field.name }}">{{ field.title }}</label>{% endif %}
{%- if field.type == "hidden" %}
<input type="hidden" name="{{ field.name }}" value="{{ field.value }}">
{%- else %}
<select name="{{ field.name }}" class="{{ field.classes | join(sep=" ") }}">
{%- for option in field.options %}
  <option value="{{ option.0 }}"{% if option.0 == selected %} selected{% endif %}>{{ option.1 }}</option>
{%- endfor %}
</select>
{%- endif %}
<button type="submit" name="action_{{ action.action }}" id="action-{{ action.action_id }}" class="{{ action.classes | join(sep=" ") }}"{% for key, value in action.data %} data-{{ key }}="{{ value }}"{% endfor %}>{{ action.title }}</button>
"#;

const DEFAULT_VIEW_LINK: &str =
    r#"<a class="grid-view-link no-ajax" href="{{ link }}">View</a>"#;

/// Renders grid fragments through Tera with inline fallbacks.
pub struct FragmentRenderer {
    tera: Tera,
}

impl FragmentRenderer {
    /// Renderer with the built-in default templates registered.
    pub fn new() -> GridResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(ADD_CHILD_TEMPLATE, DEFAULT_ADD_CHILD)
            .context("failed to register add-child template")?;
        tera.add_raw_template(VIEW_LINK_TEMPLATE, DEFAULT_VIEW_LINK)
            .context("failed to register view-link template")?;

        Ok(Self { tera })
    }

    /// Renderer over a host-supplied Tera instance.
    ///
    /// Fragments whose templates are missing from the instance use the
    /// built-in inline markup instead.
    pub fn with_tera(tera: Tera) -> Self {
        Self { tera }
    }

    /// Render the add-child fragment: type selector plus action button.
    pub fn render_add_fragment(
        &self,
        field: &GridFormField,
        action: &FormAction,
    ) -> GridResult<String> {
        if self.tera.get_template(ADD_CHILD_TEMPLATE).is_err() {
            return Ok(render_add_inline(field, action));
        }

        let mut context = TeraContext::new();
        context.insert("field", field);
        context.insert("action", action);
        context.insert("selected", &selected_value(field));

        let html = self
            .tera
            .render(ADD_CHILD_TEMPLATE, &context)
            .context("failed to render add-child fragment")?;
        Ok(html)
    }

    /// Render a view-link cell for a record's edit view.
    pub fn render_view_link(&self, link: &str) -> GridResult<String> {
        if self.tera.get_template(VIEW_LINK_TEMPLATE).is_err() {
            return Ok(render_view_link_inline(link));
        }

        let mut context = TeraContext::new();
        context.insert("link", link);

        let html = self
            .tera
            .render(VIEW_LINK_TEMPLATE, &context)
            .context("failed to render view-link fragment")?;
        Ok(html)
    }
}

/// The select field's pre-selected value, or empty for other field types.
fn selected_value(field: &GridFormField) -> String {
    match &field.field_type {
        FieldType::Select { default, .. } => default.clone().unwrap_or_default(),
        FieldType::Hidden { .. } => String::new(),
    }
}

fn render_add_inline(field: &GridFormField, action: &FormAction) -> String {
    let mut html = String::new();

    match &field.field_type {
        FieldType::Hidden { value } => {
            html.push_str(&format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                html_escape(&field.name),
                html_escape(value)
            ));
        }
        FieldType::Select { options, default } => {
            html.push_str(&format!(
                r#"<select name="{}" class="{}">"#,
                html_escape(&field.name),
                html_escape(&field.classes.join(" "))
            ));
            for (value, label) in options {
                let selected = if default.as_deref() == Some(value.as_str()) {
                    " selected"
                } else {
                    ""
                };
                html.push_str(&format!(
                    r#"<option value="{}"{selected}>{}</option>"#,
                    html_escape(value),
                    html_escape(label)
                ));
            }
            html.push_str("</select>");
        }
    }

    let data_attrs: String = action
        .data
        .iter()
        .map(|(key, value)| format!(r#" data-{key}="{}""#, html_escape(value)))
        .collect();

    html.push_str(&format!(
        r#"<button type="submit" name="action_{}" id="action-{}" class="{}"{data_attrs}>{}</button>"#,
        html_escape(&action.action),
        html_escape(&action.action_id),
        html_escape(&action.classes.join(" ")),
        html_escape(&action.title)
    ));

    html
}

fn render_view_link_inline(link: &str) -> String {
    format!(
        r#"<a class="grid-view-link no-ajax" href="{}">View</a>"#,
        html_escape(link)
    )
}
