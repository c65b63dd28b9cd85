/// Two layers with nested groups, plus the bookkeeping elements Inkscape writes.
///
/// ```text
/// svg
/// ├── defs1, view
/// ├── layer1: bg(rect), g1[p1, p2, g1a[p5]], g2[img1], p6
/// ├── layer2: p3, g3[p4], c1(circle)
/// └── meta
/// ```
pub const LAYERED: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
     xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
     id="drawing" width="210mm" height="297mm">
  <defs id="defs1"/>
  <sodipodi:namedview id="view" inkscape:zoom="1"/>
  <g id="layer1" inkscape:groupmode="layer" inkscape:label="Layer 1">
    <rect id="bg" width="10" height="10"/>
    <g id="g1">
      <path id="p1" d="M 0,0 H 1"/>
      <path id="p2" d="M 0,1 H 1"/>
      <g id="g1a"><path id="p5" d="M 0,2 H 1"/></g>
    </g>
    <g id="g2"><image id="img1" width="4" height="4"/></g>
    <path id="p6" d="M 0,3 H 1"/>
  </g>
  <g id="layer2" inkscape:groupmode="layer" inkscape:label="Layer 2">
    <path id="p3" d="M 1,0 V 1"/>
    <g id="g3"><path id="p4" d="M 1,1 V 1"/></g>
    <circle id="c1" r="2"/>
  </g>
  <metadata id="meta"/>
</svg>"##;

/// A drawing with no layers at all, groups directly under the root.
pub const FLAT_GROUPS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" id="flat">
  <g id="a"><path id="a1"/></g>
  <g id="b"><path id="b1"/><path id="b2"/></g>
  <g id="c"/>
  <g id="d"><path id="d1"/></g>
</svg>"##;

/// Builds `layers` layers, each holding `groups` groups of `paths` paths.
pub fn synthetic_drawing(layers: usize, groups: usize, paths: usize) -> String {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" id="root">"#,
    );
    for l in 0..layers {
        svg.push_str(&format!(r#"<g id="l{l}" inkscape:groupmode="layer">"#));
        for g in 0..groups {
            svg.push_str(&format!(r#"<g id="l{l}g{g}">"#));
            for p in 0..paths {
                svg.push_str(&format!(r#"<path id="l{l}g{g}p{p}" d="M0 0"/>"#));
            }
            svg.push_str("</g>");
        }
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}
