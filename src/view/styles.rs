//! Color and emphasis configuration.
//!
//! Every widget takes its styles from one [`Palette`], built once from the
//! [`ColorConfig`]. With colors disabled, palette entries keep their
//! modifiers (bold, reversed, dim) but drop foreground and background colors.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors, ignoring the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::fixed(true)
    }
}

// ===== Palette =====

/// Styles used across the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header title ("Posts").
    pub title: Style,
    /// Grid header cells.
    pub column_header: Style,
    /// Grid header cell under the keyboard column cursor.
    pub selected_column: Style,
    /// Sort direction marker.
    pub sort_marker: Style,
    /// Secondary text: placeholders, tile footers, hints.
    pub muted: Style,
    /// Enabled pagination controls.
    pub control: Style,
    /// Pagination controls that cannot be used right now.
    pub control_disabled: Style,
    /// Failure messages.
    pub error: Style,
    /// Border of the focused input.
    pub focus_border: Style,
    /// Tile title line.
    pub tile_title: Style,
    /// Key names in help and hints.
    pub key: Style,
    /// Text cursor inside inputs.
    pub cursor: Style,
}

impl Palette {
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                column_header: bold.fg(Color::White),
                selected_column: bold.fg(Color::Black).bg(Color::Cyan),
                sort_marker: Style::default().fg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
                control: bold.fg(Color::Green),
                control_disabled: dim.fg(Color::DarkGray),
                error: bold.fg(Color::Red),
                focus_border: Style::default().fg(Color::Yellow),
                tile_title: bold.fg(Color::Cyan),
                key: bold.fg(Color::Yellow),
                cursor: bold.fg(Color::Black).bg(Color::White),
            }
        } else {
            let reversed = Style::default().add_modifier(Modifier::REVERSED);
            Self {
                title: bold,
                column_header: bold,
                selected_column: bold.add_modifier(Modifier::REVERSED),
                sort_marker: Style::default(),
                muted: dim,
                control: bold,
                control_disabled: dim,
                error: bold,
                focus_border: bold,
                tile_title: bold,
                key: bold,
                cursor: reversed,
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
