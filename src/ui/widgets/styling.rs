use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the selected tab.
///
pub fn active_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for placeholders and hints.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for validation errors.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for a successful outcome.
///
pub fn success_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.success.to_color())
}

/// Return the style for warnings.
///
pub fn warning_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.warning.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}
