//! Renderer entry points for checkbox lists and enum checkbox groups.
//!
//! Both renderers emit one `<div>` block per entry inside a single
//! container `<div>` whose id derives from the resolved field name.
//! Caller attributes merge onto the container; the generated id always
//! wins over a caller-supplied one.

use tickform_core::escape::escape_html;
use tickform_core::naming::{self, FieldNameResolver, NamingScope};
use tickform_core::options::{enum_options, CheckboxEnum, EnumOption};
use tickform_core::{CheckboxListItem, RenderError};

use crate::attrs::Attributes;
use crate::markup::Markup;
use crate::tag::{TagBuilder, TagRenderMode};

/// Render a checkbox list bound to the list property `name`.
///
/// Each item gets a checkbox at `name[i].IsChecked` plus hidden fields
/// at `name[i].Text` and `name[i].Value`, so the item round-trips
/// through a form post. Fails with [`RenderError::InvalidName`] when
/// the scope resolves `name` to an empty string.
pub fn checkbox_list(
    scope: &NamingScope,
    name: &str,
    items: &[CheckboxListItem],
    attrs: &Attributes,
) -> Result<Markup, RenderError> {
    let full_name = scope.full_field_name(name);
    if full_name.is_empty() {
        return Err(RenderError::InvalidName);
    }
    let inner = build_checkbox_list_items(&full_name, items);
    Ok(wrap_in_container(&full_name, &inner, attrs))
}

/// Render a checkbox list for a model expression.
///
/// The resolver translates the expression into its form field name.
/// Fails with [`RenderError::NullExpression`] when the expression is
/// empty.
pub fn checkbox_list_for(
    resolver: &dyn FieldNameResolver,
    expression: &str,
    items: &[CheckboxListItem],
    attrs: &Attributes,
) -> Result<Markup, RenderError> {
    let name = resolve_expression(resolver, expression)?;
    let inner = build_checkbox_list_items(&name, items);
    Ok(wrap_in_container(&name, &inner, attrs))
}

/// Render one checkbox per member of `T`, all sharing the field `name`.
///
/// Members render in declaration order with their resolved display
/// labels; a member is checked iff its canonical string form appears in
/// `selected`.
pub fn enum_checkbox_list<T: CheckboxEnum>(
    scope: &NamingScope,
    name: &str,
    selected: &[T],
    attrs: &Attributes,
) -> Result<Markup, RenderError> {
    enum_checkbox_list_from_options(scope, name, &enum_options(selected), attrs)
}

/// Render an enum checkbox group for a model expression. See
/// [`checkbox_list_for`] for resolver semantics.
pub fn enum_checkbox_list_for<T: CheckboxEnum>(
    resolver: &dyn FieldNameResolver,
    expression: &str,
    selected: &[T],
    attrs: &Attributes,
) -> Result<Markup, RenderError> {
    let name = resolve_expression(resolver, expression)?;
    let options = enum_options(selected);
    ensure_distinct_values(&options)?;
    let inner = build_enum_items(&name, &options);
    Ok(wrap_in_container(&name, &inner, attrs))
}

/// Render a caller-assembled option list as an enum checkbox group.
///
/// Fails with [`RenderError::InvalidArgument`] when two options share
/// an underlying value, which only a malformed descriptor can produce.
pub fn enum_checkbox_list_from_options(
    scope: &NamingScope,
    name: &str,
    options: &[EnumOption],
    attrs: &Attributes,
) -> Result<Markup, RenderError> {
    let full_name = scope.full_field_name(name);
    if full_name.is_empty() {
        return Err(RenderError::InvalidName);
    }
    ensure_distinct_values(options)?;
    let inner = build_enum_items(&full_name, options);
    Ok(wrap_in_container(&full_name, &inner, attrs))
}

fn resolve_expression(
    resolver: &dyn FieldNameResolver,
    expression: &str,
) -> Result<String, RenderError> {
    if expression.is_empty() {
        return Err(RenderError::NullExpression);
    }
    let name = resolver.field_name(expression);
    if name.is_empty() {
        return Err(RenderError::InvalidName);
    }
    Ok(name)
}

fn ensure_distinct_values(options: &[EnumOption]) -> Result<(), RenderError> {
    for (position, option) in options.iter().enumerate() {
        if options[..position].iter().any(|seen| seen.value == option.value) {
            return Err(RenderError::InvalidArgument(format!(
                "duplicate underlying value {} in option list",
                option.value
            )));
        }
    }
    Ok(())
}

fn build_checkbox_list_items(name: &str, items: &[CheckboxListItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let checked_name = naming::child_control_name(name, index, naming::IS_CHECKED);
        let text_name = naming::child_control_name(name, index, naming::TEXT);
        let value_name = naming::child_control_name(name, index, naming::VALUE);

        out.push_str("<div>\n");
        out.push_str(checkbox_input(&checked_name, item.is_checked).as_str());
        out.push('\n');
        // companion hidden so an unchecked box still posts a value
        out.push_str(hidden_input(&checked_name, "false", false).as_str());
        out.push('\n');
        out.push_str(hidden_input(&text_name, &item.text, true).as_str());
        out.push('\n');
        out.push_str(hidden_input(&value_name, &item.value, true).as_str());
        out.push('\n');
        out.push_str(&escape_html(&item.text));
        out.push_str("\n</div>\n");
    }
    out
}

fn build_enum_items(name: &str, options: &[EnumOption]) -> String {
    let mut out = String::new();
    for option in options {
        let mut tag = TagBuilder::new("input");
        tag.render_mode(TagRenderMode::SelfClosing);
        if option.selected {
            tag.attribute("checked", "checked");
        }
        tag.attribute("name", name);
        tag.attribute("type", "checkbox");
        tag.attribute("value", option.value.to_string());

        out.push_str("<div>\n");
        out.push_str(tag.build().as_str());
        out.push('\n');
        out.push_str(&escape_html(&option.label));
        out.push_str("\n</div>\n");
    }
    out
}

fn checkbox_input(name: &str, checked: bool) -> Markup {
    let mut tag = TagBuilder::new("input");
    tag.render_mode(TagRenderMode::SelfClosing);
    if checked {
        tag.attribute("checked", "checked");
    }
    tag.attribute("id", naming::sanitize_id(name));
    tag.attribute("name", name);
    tag.attribute("type", "checkbox");
    tag.attribute("value", "true");
    tag.build()
}

fn hidden_input(name: &str, value: &str, with_id: bool) -> Markup {
    let mut tag = TagBuilder::new("input");
    tag.render_mode(TagRenderMode::SelfClosing);
    if with_id {
        tag.attribute("id", naming::sanitize_id(name));
    }
    tag.attribute("name", name);
    tag.attribute("type", "hidden");
    tag.attribute("value", value);
    tag.build()
}

fn wrap_in_container(full_name: &str, inner: &str, attrs: &Attributes) -> Markup {
    let mut container = TagBuilder::new("div");
    container.append_html("\n");
    container.append_html(inner);
    container.merge_attributes(attrs);
    container.force_attribute("id", naming::sanitize_id(full_name));
    container.build()
}
