use formcap_types::FormTheme;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1a73e8";
pub const DEFAULT_SECONDARY_COLOR: &str = "#f1f3f4";
pub const DEFAULT_ACCENT_COLOR: &str = "#202124";

/// Emit the presentation variables for a form theme. Missing channels fall
/// back to the stock palette, so a partial theme still yields a complete
/// variable block.
pub fn theme_css(theme: Option<&FormTheme>) -> String {
    let primary = channel(theme, |t| t.primary_color.as_deref(), DEFAULT_PRIMARY_COLOR);
    let secondary = channel(
        theme,
        |t| t.secondary_color.as_deref(),
        DEFAULT_SECONDARY_COLOR,
    );
    let accent = channel(theme, |t| t.accent_color.as_deref(), DEFAULT_ACCENT_COLOR);

    format!(
        ":root {{\n  --primary-color: {};\n  --secondary-color: {};\n  --accent-color: {};\n}}\n",
        primary, secondary, accent
    )
}

fn channel<'a>(
    theme: Option<&'a FormTheme>,
    pick: impl Fn(&'a FormTheme) -> Option<&'a str>,
    default: &'a str,
) -> &'a str {
    theme.and_then(pick).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_css_with_full_theme() {
        let theme = FormTheme {
            primary_color: Some("#ff0000".to_string()),
            secondary_color: Some("#00ff00".to_string()),
            accent_color: Some("#0000ff".to_string()),
        };
        let css = theme_css(Some(&theme));
        assert!(css.contains("--primary-color: #ff0000;"));
        assert!(css.contains("--secondary-color: #00ff00;"));
        assert!(css.contains("--accent-color: #0000ff;"));
    }

    #[test]
    fn test_theme_css_defaults_fill_missing_channels() {
        let theme = FormTheme {
            primary_color: Some("#123456".to_string()),
            secondary_color: None,
            accent_color: None,
        };
        let css = theme_css(Some(&theme));
        assert!(css.contains("--primary-color: #123456;"));
        assert!(css.contains(DEFAULT_SECONDARY_COLOR));
        assert!(css.contains(DEFAULT_ACCENT_COLOR));
    }

    #[test]
    fn test_theme_css_without_theme() {
        let css = theme_css(None);
        assert!(css.contains(DEFAULT_PRIMARY_COLOR));
    }
}
