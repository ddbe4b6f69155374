//! Breadcrumb rendering of keys.
//!
//! A key such as `"a:b:c"` becomes a button group holding one unit per
//! non-empty segment. Every unit but the last ends with a caret separator,
//! and the whole group shows the raw key as its tooltip:
//!
//! ```text
//! div.btn-group.btn-breadcrumb [title="a:b:c"]
//!   div.key-value-value  span "a"  i.fas.fa-caret-right
//!   div.key-value-value  span "b"  i.fas.fa-caret-right
//!   div.key-value-value  span "c"
//! ```

use crate::key::{Segment, Trail};
use crate::node::{ElementBuilder, Node};
use itertools::{Itertools, Position};
use log::trace;

pub const CONTAINER_CLASS: &str = "btn-group btn-breadcrumb";
pub const SEGMENT_CLASS: &str = "key-value-value";
pub const SEPARATOR_CLASS: &str = "fas fa-caret-right";

pub fn render(key: &str) -> Node {
    render_trail(&Trail::parse(key))
}

/// Renders a possibly absent value; `None` renders like the empty key.
pub fn render_value(value: Option<&str>) -> Node {
    render(value.unwrap_or_default())
}

pub fn render_trail(trail: &Trail) -> Node {
    trace!(
        "Rendering key {:?}: {} segment(s), {} separator(s)",
        trail.key(),
        trail.len(),
        trail.separator_count()
    );

    let mut container = ElementBuilder::new("div");
    container
        .class(CONTAINER_CLASS)
        .attribute("data-toggle", "tooltip")
        .attribute("data-placement", "top")
        .attribute("title", trail.key());

    for position in trail.iter().with_position() {
        let unit = match position {
            Position::First(segment) | Position::Middle(segment) => render_segment(segment, true),
            Position::Last(segment) | Position::Only(segment) => render_segment(segment, false),
        };
        container.child(unit);
    }

    container.build()
}

fn render_segment(segment: &Segment, followed_by_separator: bool) -> Node {
    let mut unit = ElementBuilder::new("div");
    unit.class(SEGMENT_CLASS)
        .key(segment.identity.as_str())
        .child(ElementBuilder::new("span").text(segment.text.as_str()).build());

    if followed_by_separator {
        unit.child(separator());
    }

    unit.build()
}

fn separator() -> Node {
    ElementBuilder::new("i").class(SEPARATOR_CLASS).build()
}
