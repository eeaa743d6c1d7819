use marketplace::icons::{Icon, IconService, IconStyle, IconTheme};
use ratatui::style::Modifier;

#[test]
fn test_feather_icons_use_stroke_style() {
    let stroke: Vec<&str> = Icon::ALL
        .iter()
        .filter(|icon| icon.style() == IconStyle::Stroke)
        .map(|icon| icon.name())
        .collect();
    assert_eq!(stroke, vec!["chevron-left", "check", "help-circle", "trash", "paperclip"]);
}

#[test]
fn test_every_icon_has_a_glyph_in_every_theme() {
    for theme in [IconTheme::Ascii, IconTheme::Unicode, IconTheme::Emoji] {
        for icon in Icon::ALL {
            assert!(!icon.glyph(theme).is_empty(), "{icon} has no {theme:?} glyph");
        }
    }
}

#[test]
fn test_icon_names_are_unique() {
    let mut names: Vec<&str> = Icon::ALL.iter().map(|icon| icon.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 23);
}

#[test]
fn test_render_uses_service_theme() {
    let service = IconService::new(IconTheme::Ascii);
    let span = service.render(Icon::Plus, None);
    assert_eq!(span.content, "+");
    assert!(span.style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(span.style.fg, None);
}
