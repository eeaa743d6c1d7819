//! Icon library rendered as terminal glyphs
//!
//! Every icon in the closed [`Icon`] set maps to a glyph in each [`IconTheme`]
//! and belongs to one of two source art styles: stroke-based line icons and
//! fill-based solid icons. Fill icons render bold so the two families stay
//! distinguishable in the terminal.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Source art family of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Outline icons drawn with strokes
    Stroke,
    /// Solid icons drawn with fills
    Fill,
}

/// Every icon available to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ChevronLeft,
    Calendar,
    Clock,
    MapMarker,
    Check,
    HelpCircle,
    Trash,
    Paperclip,
    QuestionCircle,
    Rfi,
    Matchmaking,
    DiscoveryDay,
    RatingGood,
    RatingNeutral,
    RatingBad,
    Search,
    Buyer,
    Vendor,
    Times,
    TimesCircle,
    ExclamationCircle,
    Plus,
    Bell,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon '{0}'")]
pub struct UnknownIcon(pub String);

impl Icon {
    pub const ALL: [Icon; 23] = [
        Icon::ChevronLeft,
        Icon::Calendar,
        Icon::Clock,
        Icon::MapMarker,
        Icon::Check,
        Icon::HelpCircle,
        Icon::Trash,
        Icon::Paperclip,
        Icon::QuestionCircle,
        Icon::Rfi,
        Icon::Matchmaking,
        Icon::DiscoveryDay,
        Icon::RatingGood,
        Icon::RatingNeutral,
        Icon::RatingBad,
        Icon::Search,
        Icon::Buyer,
        Icon::Vendor,
        Icon::Times,
        Icon::TimesCircle,
        Icon::ExclamationCircle,
        Icon::Plus,
        Icon::Bell,
    ];

    /// Kebab-case name of the icon
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::ChevronLeft => "chevron-left",
            Icon::Calendar => "calendar",
            Icon::Clock => "clock",
            Icon::MapMarker => "map-marker",
            Icon::Check => "check",
            Icon::HelpCircle => "help-circle",
            Icon::Trash => "trash",
            Icon::Paperclip => "paperclip",
            Icon::QuestionCircle => "question-circle",
            Icon::Rfi => "rfi",
            Icon::Matchmaking => "matchmaking",
            Icon::DiscoveryDay => "discovery-day",
            Icon::RatingGood => "rating-good",
            Icon::RatingNeutral => "rating-neutral",
            Icon::RatingBad => "rating-bad",
            Icon::Search => "search",
            Icon::Buyer => "buyer",
            Icon::Vendor => "vendor",
            Icon::Times => "times",
            Icon::TimesCircle => "times-circle",
            Icon::ExclamationCircle => "exclamation-circle",
            Icon::Plus => "plus",
            Icon::Bell => "bell",
        }
    }

    #[must_use]
    pub fn style(self) -> IconStyle {
        match self {
            Icon::ChevronLeft | Icon::Check | Icon::HelpCircle | Icon::Trash | Icon::Paperclip => IconStyle::Stroke,
            Icon::Calendar
            | Icon::Clock
            | Icon::MapMarker
            | Icon::QuestionCircle
            | Icon::Rfi
            | Icon::Matchmaking
            | Icon::DiscoveryDay
            | Icon::RatingGood
            | Icon::RatingNeutral
            | Icon::RatingBad
            | Icon::Search
            | Icon::Buyer
            | Icon::Vendor
            | Icon::Times
            | Icon::TimesCircle
            | Icon::ExclamationCircle
            | Icon::Plus
            | Icon::Bell => IconStyle::Fill,
        }
    }

    /// Glyph for this icon in the given theme
    #[must_use]
    pub fn glyph(self, theme: IconTheme) -> &'static str {
        let (ascii, unicode, emoji) = match self {
            Icon::ChevronLeft => ("<", "‹", "◀️"),
            Icon::Calendar => ("[#]", "▦", "📅"),
            Icon::Clock => ("(o)", "◷", "🕒"),
            Icon::MapMarker => ("@", "⌖", "📍"),
            Icon::Check => ("X", "✓", "✅"),
            Icon::HelpCircle => ("?", "⍰", "❔"),
            Icon::Trash => ("del", "⌫", "🗑️"),
            Icon::Paperclip => ("&", "⎘", "📎"),
            Icon::QuestionCircle => ("(?)", "?", "❓"),
            Icon::Rfi => ("RFI", "▤", "📄"),
            Icon::Matchmaking => ("<>", "⇄", "🤝"),
            Icon::DiscoveryDay => ("DD", "▣", "🗓️"),
            Icon::RatingGood => (":)", "☺", "😀"),
            Icon::RatingNeutral => (":|", "◐", "😐"),
            Icon::RatingBad => (":(", "☹", "🙁"),
            Icon::Search => ("/", "⌕", "🔍"),
            Icon::Buyer => ("B", "⌂", "🏛️"),
            Icon::Vendor => ("V", "⚒", "🏭"),
            Icon::Times => ("x", "✕", "✖️"),
            Icon::TimesCircle => ("(x)", "⊗", "❌"),
            Icon::ExclamationCircle => ("(!)", "❢", "❗"),
            Icon::Plus => ("+", "✚", "➕"),
            Icon::Bell => ("*", "⍾", "🔔"),
        };
        match theme {
            IconTheme::Ascii => ascii,
            IconTheme::Unicode => unicode,
            IconTheme::Emoji => emoji,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Icon service for rendering icons in the configured theme
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    #[must_use]
    pub fn glyph(&self, icon: Icon) -> &'static str {
        icon.glyph(self.current_theme)
    }

    /// Render an icon as a styled span, optionally colored
    #[must_use]
    pub fn render(&self, icon: Icon, color: Option<Color>) -> Span<'static> {
        let mut style = Style::default();
        if let Some(color) = color {
            style = style.fg(color);
        }
        if icon.style() == IconStyle::Fill {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(self.glyph(icon), style)
    }
}
