//! Node names.

use framecast_dom::ElementData;

/// Display name for an element's node: `tag#id`, else `tag.class` using the
/// first class, else the bare tag.
#[must_use]
pub fn element_name(element: &ElementData) -> String {
    let tag = &element.tag_name;
    if let Some(id) = element.id() {
        return format!("{tag}#{id}");
    }
    match element.class_list().first() {
        Some(class) => format!("{tag}.{class}"),
        None => tag.clone(),
    }
}
