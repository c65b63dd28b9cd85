//! Maps SVG and Inkscape elements onto query node kinds.
use roxmltree::Node;
use zpath_query::NodeKind;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";
pub const SODIPODI_NS: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

/// Classifies an element. Non-elements and unrecognised tags are `Other`.
pub fn classify(node: Node<'_, '_>) -> NodeKind {
    if !node.is_element() {
        return NodeKind::Other;
    }
    let tag = node.tag_name();
    match (tag.namespace(), tag.name()) {
        (Some(SODIPODI_NS), "namedview") => NodeKind::NamedView,
        (Some(SVG_NS) | None, name) => classify_svg_element(node, name),
        _ => NodeKind::Other,
    }
}

fn classify_svg_element(node: Node<'_, '_>, name: &str) -> NodeKind {
    match name {
        "svg" if node.parent_element().is_none() => NodeKind::Root,
        "g" if is_layer(node) => NodeKind::Layer,
        "g" => NodeKind::Group,
        "path" => NodeKind::Path,
        "image" => NodeKind::Image,
        "rect" => NodeKind::Rectangle,
        "circle" => NodeKind::Circle,
        "ellipse" => NodeKind::Ellipse,
        "line" => NodeKind::Line,
        "polyline" => NodeKind::Polyline,
        "polygon" => NodeKind::Polygon,
        "text" => NodeKind::Text,
        "tspan" => NodeKind::TextSpan,
        "use" => NodeKind::Use,
        "a" => NodeKind::Anchor,
        "defs" => NodeKind::Defs,
        "metadata" => NodeKind::Metadata,
        "style" => NodeKind::Style,
        _ => NodeKind::Other,
    }
}

/// Inkscape marks layers as groups with `inkscape:groupmode="layer"`.
fn is_layer(node: Node<'_, '_>) -> bool {
    node.attribute((INKSCAPE_NS, "groupmode")) == Some("layer")
}
