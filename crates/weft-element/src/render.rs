//! Rendered node descriptions
//!
//! Rendering produces plain data: a node name, class list, literal
//! attributes, children, and the out-of-flow nearby slots. DOM construction
//! and event wiring live outside this crate; `to_html` exists for static
//! rendering and snapshot-style assertions.

use weft_style::registry::StyleRegistry;
use weft_style::sheet::classes;

use crate::attribute::{Attribute, Location};
use crate::resolve::{self, LayoutContext};

/// A rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Empty,
    Text(String),
    Node(RenderedNode),
}

/// Description of one rendered DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub node: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Nearby children stacked behind the content, in source order.
    pub behind: Vec<Element>,
    /// Nearby children stacked over the content, in source order.
    pub in_front: Vec<Element>,
}

/// Resolve a node's attributes and build its rendered description.
///
/// New dynamic styles are registered into `registry`; the node itself only
/// carries class names and literal attributes.
pub fn render(
    context: LayoutContext,
    attrs: Vec<Attribute>,
    children: Vec<Element>,
    registry: &mut StyleRegistry,
) -> Element {
    let gathered = resolve::gather(context, attrs);
    tracing::trace!(
        context = ?context,
        classes = gathered.classes.len(),
        styles = gathered.styles.len(),
        "resolved node"
    );
    for style in gathered.styles {
        registry.register(style);
    }

    let mut node_classes: Vec<String> =
        context.classes().iter().map(|s| s.to_string()).collect();
    node_classes.extend(gathered.classes);

    let mut behind = Vec::new();
    let mut in_front = Vec::new();
    for (location, element) in gathered.nearby {
        let wrapped = wrap_nearby(location, element);
        match location {
            Location::Behind => behind.push(wrapped),
            _ => in_front.push(wrapped),
        }
    }

    Element::Node(RenderedNode {
        node: gathered.node,
        classes: node_classes,
        attributes: gathered.attributes,
        children,
        behind,
        in_front,
    })
}

/// Wrap a nearby child in its absolutely-positioned container.
fn wrap_nearby(location: Location, element: Element) -> Element {
    let location_class = match location {
        Location::Above => classes::ABOVE,
        Location::Below => classes::BELOW,
        Location::OnRight => classes::ON_RIGHT,
        Location::OnLeft => classes::ON_LEFT,
        Location::InFront => classes::IN_FRONT,
        Location::Behind => classes::BEHIND,
    };
    Element::Node(RenderedNode {
        node: "div".to_string(),
        classes: vec![
            classes::ANY.to_string(),
            classes::SINGLE.to_string(),
            location_class.to_string(),
        ],
        attributes: Vec::new(),
        children: vec![element],
        behind: Vec::new(),
        in_front: Vec::new(),
    })
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Element {
    /// Serialize to HTML text. Behind children render before the node's own
    /// content, in-front children after, matching their stacking order.
    pub fn to_html(&self) -> String {
        match self {
            Element::Empty => String::new(),
            Element::Text(text) => format!(
                "<div class=\"{} {} {} {}\">{}</div>",
                classes::ANY,
                classes::TEXT,
                classes::WIDTH_CONTENT,
                classes::HEIGHT_CONTENT,
                escape(text)
            ),
            Element::Node(node) => {
                let mut out = String::new();
                out.push('<');
                out.push_str(&node.node);
                if !node.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&node.classes.join(" "));
                    out.push('"');
                }
                for (name, value) in &node.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                out.push('>');
                for child in &node.behind {
                    out.push_str(&child.to_html());
                }
                for child in &node.children {
                    out.push_str(&child.to_html());
                }
                for child in &node.in_front {
                    out.push_str(&child.to_html());
                }
                out.push_str("</");
                out.push_str(&node.node);
                out.push('>');
                out
            }
        }
    }
}
