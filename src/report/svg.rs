use crate::types::report::Badge;

/// 120x40 card with a level-coloured gradient, icon on top, name below.
pub fn badge_svg(badge: &Badge) -> String {
    let color = badge.level.color();
    let id = escape_xml(&badge.id);
    format!(
        r##"<svg width="120" height="40" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad-{id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{color}99;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect x="2" y="2" width="116" height="36" rx="8" fill="url(#grad-{id})" stroke="#333" stroke-width="1"/>
  <text x="60" y="15" text-anchor="middle" font-family="Arial" font-size="10" fill="white">{icon}</text>
  <text x="60" y="30" text-anchor="middle" font-family="Arial" font-size="8" fill="white">{name}</text>
</svg>
"##,
        icon = escape_xml(&badge.icon),
        name = escape_xml(&badge.name),
    )
}

/// All badges, one SVG document after another.
pub fn badge_sheet(badges: &[Badge]) -> String {
    badges.iter().map(badge_svg).collect()
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
