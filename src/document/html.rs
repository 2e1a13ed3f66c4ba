use std::fmt::Write as _;

use crate::{
    document::{
        css::{animation_decl, keyframe_rules},
        style::{StyleConfig, escape_html},
    },
    foundation::core::format_num,
    timeline::compiler::TrackOffsets,
};

/// Location of the staged logo, relative to the document.
pub const LOGO_REL_PATH: &str = "assets/logo.png";

/// File name of the generated document inside the output directory.
pub const DOCUMENT_FILE_NAME: &str = "overlay.html";

const STATIC_RULES: &str = r#"    html, body { height: 100%; }
    .stage { position: fixed; inset: 0; display: grid; place-items: center; pointer-events: none; }
    .hover { display: inline-block; will-change: transform; }
    .brandwrap { position: relative; display: inline-block; }
    .brand { position: relative; z-index: 1; font-weight: 700; letter-spacing: 0.02em; font-size: var(--brand-size); line-height: 1.05; }
    .logoWrap { position: relative; display: inline-grid; place-items: center; }
"#;

const RESPONSIVE_RULES: &str =
    "    @media (max-width: 720px) { .banner { --brand-size: clamp(18px, 5.5vmin, 56px); } }\n";

/// Render the complete overlay document.
///
/// Pure: the same style and offsets always produce the same bytes.
pub fn render_document(style: &StyleConfig, offsets: &TrackOffsets) -> String {
    let total = offsets.total_secs();
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\" />\n  <title>Overlay</title>\n  <style>\n");
    write_rules(&mut out, style, offsets, total);
    out.push_str(&keyframe_rules(offsets, 4));
    out.push_str(RESPONSIVE_RULES);
    out.push_str("  </style>\n</head>\n<body>\n");
    write_body(&mut out, style);
    out.push_str("</body>\n</html>\n");
    out
}

fn write_rules(out: &mut String, style: &StyleConfig, offsets: &TrackOffsets, total: f64) {
    out.push_str(STATIC_RULES);
    let _ = writeln!(
        out,
        "    body {{ margin: 0; background: transparent; overflow: hidden; font-family: {}; color: {}; }}",
        style.font_stack(),
        style.text_color
    );
    if let Some(hover) = &offsets.hover {
        let _ = writeln!(out, "    .hover {{ {} }}", animation_decl(hover, total));
    }

    let _ = writeln!(out, "    .banner {{");
    let _ = writeln!(out, "      --brand-size: {};", style.brand_size_css);
    out.push_str(
        "      --pad-y: calc(var(--brand-size) * 0.30);
      --pad-x: calc(var(--brand-size) * 0.55);
      --radius: calc(var(--brand-size) * 0.25);
      --logo-h: calc(var(--brand-size) * 1.0);
      --uline: max(2px, calc(var(--brand-size) * 0.05));
      position: relative;
      display: inline-grid;
      grid-auto-flow: column;
      grid-template-columns: max-content max-content;
      align-items: center;
      column-gap: calc(var(--brand-size) * 0.45);
      width: max-content;
",
    );
    let _ = writeln!(out, "      max-width: {};", style.container_max_w);
    out.push_str(
        "      padding: var(--pad-y) var(--pad-x);
      border-radius: var(--radius);
",
    );
    let _ = writeln!(out, "      background: {};", style.banner_fill());
    out.push_str(
        "      backdrop-filter: blur(2px);
      -webkit-backdrop-filter: blur(2px);
",
    );
    let _ = writeln!(out, "      {}", animation_decl(&offsets.banner, total));
    out.push_str("      will-change: transform, opacity, filter;\n    }\n");

    let _ = writeln!(
        out,
        "    .textblock {{ display: grid; row-gap: calc(var(--brand-size) * 0.18); {} will-change: transform, opacity, filter; }}",
        animation_decl(&offsets.text, total)
    );
    let _ = writeln!(
        out,
        "    .underline {{ position: absolute; left: 0; right: 0; bottom: -0.08em; height: var(--uline); background: {}; transform-origin: left center; z-index: 0; pointer-events: none; {} will-change: transform, opacity; }}",
        style.accent_color,
        animation_decl(&offsets.underline, total)
    );

    let tagline_anim = offsets
        .tagline
        .as_ref()
        .map(|t| format!(" {} will-change: clip-path;", animation_decl(t, total)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "    .tagline {{ font-weight: 500; letter-spacing: 0.02em; font-size: clamp(12px, calc(var(--brand-size) * 0.42), 24px); color: {}; max-width: calc(var(--brand-size) * 20); overflow-wrap: anywhere;{tagline_anim} }}",
        style.muted_color
    );

    let _ = writeln!(out, "    .logoStroke {{");
    let _ = writeln!(
        out,
        "      position: absolute; inset: 0; z-index: 0; background: {}; transform: scale({});",
        style.accent_color,
        format_num(style.stroke_scale)
    );
    let _ = writeln!(
        out,
        "      -webkit-mask-image: url('{LOGO_REL_PATH}'); mask-image: url('{LOGO_REL_PATH}');"
    );
    out.push_str(
        "      -webkit-mask-repeat: no-repeat; mask-repeat: no-repeat;
      -webkit-mask-position: center; mask-position: center;
      -webkit-mask-size: contain; mask-size: contain;
      pointer-events: none;
",
    );
    let _ = writeln!(out, "      {}", animation_decl(&offsets.stroke, total));
    out.push_str("    }\n");

    let _ = writeln!(
        out,
        "    .logo {{ position: relative; z-index: 1; height: var(--logo-h); width: auto; max-width: calc(var(--brand-size) * 6); object-fit: contain; {} will-change: transform, opacity, filter; }}",
        animation_decl(&offsets.logo, total)
    );
}

fn write_body(out: &mut String, style: &StyleConfig) {
    let brand = escape_html(&style.brand_text);
    let label = if style.tagline_visible() {
        format!("{brand} \u{2014} {}", escape_html(&style.tagline_text))
    } else {
        brand.clone()
    };

    out.push_str("  <div class=\"stage\">\n    <div class=\"hover\">\n");
    let _ = writeln!(
        out,
        "      <div class=\"banner\" role=\"img\" aria-label=\"{label}\">"
    );
    out.push_str("        <div class=\"textblock\">\n          <div class=\"brandwrap\">\n");
    let _ = writeln!(out, "            <div class=\"brand\">{brand}</div>");
    out.push_str("            <div class=\"underline\"></div>\n          </div>\n");
    if style.tagline_visible() {
        let _ = writeln!(
            out,
            "          <div class=\"tagline\">{}</div>",
            escape_html(&style.tagline_text)
        );
    }
    out.push_str("        </div>\n        <div class=\"logoWrap\">\n");
    out.push_str("          <div class=\"logoStroke\"></div>\n");
    let _ = writeln!(
        out,
        "          <img class=\"logo\" src=\"{LOGO_REL_PATH}\" alt=\"Logo\">"
    );
    out.push_str("        </div>\n      </div>\n    </div>\n  </div>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/document/html.rs"]
mod tests;
