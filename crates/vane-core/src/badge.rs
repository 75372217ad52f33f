use crate::resolve::ResolvedStatus;
use crate::types::{HealthStatus, SyncStatus};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form embedded in the SVG markup.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const GREEN: Color = Color::new(0x18, 0xbe, 0x52);
pub const RED: Color = Color::new(0xe9, 0x6d, 0x76);
pub const ORANGE: Color = Color::new(0xf4, 0xc0, 0x30);
pub const PURPLE: Color = Color::new(0xb2, 0x66, 0xff);

// ---------------------------------------------------------------------------
// BadgeSpec
// ---------------------------------------------------------------------------

/// Label shown when the badge has nothing it may reveal.
const UNKNOWN_LABEL: &str = "Unknown";

/// Revision suffixes are truncated to short-commit length.
const REVISION_LEN: usize = 7;

/// The fully decided badge: colors and labels for both segments plus the
/// optional revision suffix. Left always describes health, right always
/// describes sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub left_color: Color,
    pub right_color: Color,
    pub left_text: String,
    pub right_text: String,
    pub revision_suffix: Option<String>,
}

impl BadgeSpec {
    /// The badge rendered when the feature is disabled or nothing
    /// resolved. Both cases look identical on purpose: a viewer cannot
    /// tell a hidden application from a missing one.
    pub fn unknown() -> Self {
        Self {
            left_color: PURPLE,
            right_color: PURPLE,
            left_text: UNKNOWN_LABEL.to_string(),
            right_text: UNKNOWN_LABEL.to_string(),
            revision_suffix: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Status → spec mapping
// ---------------------------------------------------------------------------

fn health_color(health: HealthStatus) -> Color {
    match health {
        HealthStatus::Healthy => GREEN,
        HealthStatus::Degraded => RED,
        HealthStatus::Progressing
        | HealthStatus::Suspended
        | HealthStatus::Missing
        | HealthStatus::Unknown => ORANGE,
    }
}

fn sync_color(sync: SyncStatus) -> Color {
    match sync {
        SyncStatus::Synced => GREEN,
        SyncStatus::OutOfSync => ORANGE,
        SyncStatus::Unknown => PURPLE,
    }
}

fn short_revision(revision: &str) -> String {
    revision.chars().take(REVISION_LEN).collect()
}

/// Map a resolution outcome to the badge's colors and labels.
///
/// The suffix appears only when `show_revision` is set and the resolved
/// status carries a non-empty revision.
pub fn map_status(
    enabled: bool,
    status: Option<&ResolvedStatus>,
    show_revision: bool,
) -> BadgeSpec {
    if !enabled {
        return BadgeSpec::unknown();
    }
    let Some(status) = status else {
        return BadgeSpec::unknown();
    };

    let revision_suffix = if show_revision {
        status
            .revision
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| format!("({})", short_revision(r)))
    } else {
        None
    };

    BadgeSpec {
        left_color: health_color(status.health),
        right_color: sync_color(status.sync),
        left_text: status.health.as_str().to_string(),
        right_text: status.sync.as_str().to_string(),
        revision_suffix,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

const HEIGHT: u32 = 20;
const TEXT_Y: u32 = 14;
/// Approximate advance of an 11px sans glyph; widths derive only from
/// character counts so identical specs render identical bytes.
const CHAR_WIDTH: u32 = 7;
const PAD: u32 = 6;
const FONT: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";

fn text_span(text: &str) -> u32 {
    text.chars().count() as u32 * CHAR_WIDTH
}

/// Minimal XML escaping for text content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the badge markup. Pure: output depends only on the spec, with no
/// timestamps or generated ids, so consumers may diff badge bytes.
pub fn render(spec: &BadgeSpec) -> String {
    let left_w = text_span(&spec.left_text) + 2 * PAD;
    let sync_w = text_span(&spec.right_text) + 2 * PAD;
    let right_w = match &spec.revision_suffix {
        Some(suffix) => sync_w + text_span(suffix) + PAD,
        None => sync_w,
    };
    let total = left_w + right_w;
    let left_center = left_w / 2;
    let right_center = left_w + sync_w / 2;

    let mut svg = format!(
        "<svg width=\"{total}\" height=\"{HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">\n\
         <rect id=\"leftRect\" fill=\"{left_color}\" x=\"0\" y=\"0\" width=\"{left_w}\" height=\"{HEIGHT}\"/>\n\
         <rect id=\"rightRect\" fill=\"{right_color}\" x=\"{left_w}\" y=\"0\" width=\"{right_w}\" height=\"{HEIGHT}\"/>\n\
         <g font-family=\"{FONT}\" font-size=\"11\" fill=\"#ffffff\" text-anchor=\"middle\">\n\
         <text id=\"leftText\" x=\"{left_center}\" y=\"{TEXT_Y}\">{left_text}</text>\n\
         <text id=\"rightText\" x=\"{right_center}\" y=\"{TEXT_Y}\">{right_text}</text>\n",
        left_color = spec.left_color.hex(),
        right_color = spec.right_color.hex(),
        left_text = escape(&spec.left_text),
        right_text = escape(&spec.right_text),
    );
    if let Some(suffix) = &spec.revision_suffix {
        let suffix_center = left_w + sync_w + text_span(suffix) / 2;
        svg.push_str(&format!(
            "<text id=\"revisionText\" x=\"{suffix_center}\" y=\"{TEXT_Y}\">{suffix}</text>\n",
            suffix = escape(suffix),
        ));
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(health: HealthStatus, sync: SyncStatus, revision: Option<&str>) -> ResolvedStatus {
        ResolvedStatus {
            health,
            sync,
            revision: revision.map(str::to_string),
        }
    }

    #[test]
    fn disabled_maps_to_unknown_badge() {
        let status = resolved(HealthStatus::Healthy, SyncStatus::Synced, Some("aa29b85"));
        let spec = map_status(false, Some(&status), true);
        assert_eq!(spec, BadgeSpec::unknown());
        assert_eq!(spec.left_color, PURPLE);
        assert_eq!(spec.left_text, "Unknown");
        assert!(spec.revision_suffix.is_none());
    }

    #[test]
    fn unresolved_maps_like_disabled() {
        // Not-found with the feature on is indistinguishable from the
        // feature being off.
        assert_eq!(map_status(true, None, true), map_status(false, None, false));
    }

    #[test]
    fn health_colors_follow_fixed_table() {
        for (health, color) in [
            (HealthStatus::Healthy, GREEN),
            (HealthStatus::Degraded, RED),
            (HealthStatus::Progressing, ORANGE),
            (HealthStatus::Suspended, ORANGE),
            (HealthStatus::Missing, ORANGE),
            (HealthStatus::Unknown, ORANGE),
        ] {
            let spec = map_status(true, Some(&resolved(health, SyncStatus::Synced, None)), false);
            assert_eq!(spec.left_color, color, "health {health}");
            assert_eq!(spec.left_text, health.as_str());
            // Sync side is untouched by health.
            assert_eq!(spec.right_color, GREEN);
            assert_eq!(spec.right_text, "Synced");
        }
    }

    #[test]
    fn sync_colors_follow_fixed_table() {
        for (sync, color) in [
            (SyncStatus::Synced, GREEN),
            (SyncStatus::OutOfSync, ORANGE),
            (SyncStatus::Unknown, PURPLE),
        ] {
            let spec = map_status(true, Some(&resolved(HealthStatus::Healthy, sync, None)), false);
            assert_eq!(spec.right_color, color, "sync {sync}");
            assert_eq!(spec.right_text, sync.as_str());
            assert_eq!(spec.left_color, GREEN);
        }
    }

    #[test]
    fn suffix_requires_show_revision() {
        let status = resolved(HealthStatus::Healthy, SyncStatus::Synced, Some("aa29b85"));
        assert!(map_status(true, Some(&status), false)
            .revision_suffix
            .is_none());
        assert_eq!(
            map_status(true, Some(&status), true).revision_suffix.as_deref(),
            Some("(aa29b85)")
        );
    }

    #[test]
    fn suffix_omitted_without_revision() {
        let status = resolved(HealthStatus::Healthy, SyncStatus::Synced, None);
        assert!(map_status(true, Some(&status), true)
            .revision_suffix
            .is_none());
    }

    #[test]
    fn suffix_omitted_for_empty_revision() {
        let status = resolved(HealthStatus::Healthy, SyncStatus::Synced, Some(""));
        assert!(map_status(true, Some(&status), true)
            .revision_suffix
            .is_none());
    }

    #[test]
    fn long_revision_truncated_to_seven() {
        let status = resolved(
            HealthStatus::Healthy,
            SyncStatus::Synced,
            Some("aa29b85f1c9e4d2b8a7f6e5d4c3b2a1098765432"),
        );
        assert_eq!(
            map_status(true, Some(&status), true).revision_suffix.as_deref(),
            Some("(aa29b85)")
        );
    }

    #[test]
    fn short_revision_passes_through() {
        let status = resolved(HealthStatus::Healthy, SyncStatus::Synced, Some("abc"));
        assert_eq!(
            map_status(true, Some(&status), true).revision_suffix.as_deref(),
            Some("(abc)")
        );
    }

    #[test]
    fn color_hex_is_lowercase_six_digits() {
        assert_eq!(GREEN.hex(), "#18be52");
        assert_eq!(RED.hex(), "#e96d76");
        assert_eq!(ORANGE.hex(), "#f4c030");
        assert_eq!(PURPLE.hex(), "#b266ff");
    }

    #[test]
    fn render_contains_both_segments() {
        let spec = map_status(
            true,
            Some(&resolved(
                HealthStatus::Degraded,
                SyncStatus::OutOfSync,
                None,
            )),
            false,
        );
        let svg = render(&spec);
        assert!(svg.contains("id=\"leftRect\" fill=\"#e96d76\""));
        assert!(svg.contains("id=\"rightRect\" fill=\"#f4c030\""));
        assert!(svg.contains(">Degraded</text>"));
        assert!(svg.contains(">OutOfSync</text>"));
        assert!(!svg.contains("revisionText"));
    }

    #[test]
    fn render_revision_is_a_separate_element() {
        let spec = map_status(
            true,
            Some(&resolved(
                HealthStatus::Healthy,
                SyncStatus::Synced,
                Some("aa29b85"),
            )),
            true,
        );
        let svg = render(&spec);
        // The sync label stays bare; the suffix rides in its own element.
        assert!(svg.contains("id=\"rightText\" x=\"88\" y=\"14\">Synced</text>"));
        assert!(svg.contains("id=\"revisionText\""));
        assert!(svg.contains("(aa29b85)"));
    }

    #[test]
    fn render_is_byte_stable() {
        let spec = map_status(
            true,
            Some(&resolved(
                HealthStatus::Healthy,
                SyncStatus::Synced,
                Some("aa29b85"),
            )),
            true,
        );
        assert_eq!(render(&spec), render(&spec));
    }

    #[test]
    fn render_widens_for_suffix() {
        let bare = map_status(
            true,
            Some(&resolved(HealthStatus::Healthy, SyncStatus::Synced, Some("aa29b85"))),
            false,
        );
        let suffixed = map_status(
            true,
            Some(&resolved(HealthStatus::Healthy, SyncStatus::Synced, Some("aa29b85"))),
            true,
        );
        assert!(render(&suffixed).len() > render(&bare).len());
    }

    #[test]
    fn render_escapes_text_content() {
        let spec = BadgeSpec {
            revision_suffix: Some("(a<b&c)".to_string()),
            ..BadgeSpec::unknown()
        };
        let svg = render(&spec);
        assert!(svg.contains("(a&lt;b&amp;c)"));
        assert!(!svg.contains("(a<b&c)"));
    }
}
