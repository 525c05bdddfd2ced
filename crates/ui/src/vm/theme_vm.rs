use roadmap_core::model::Theme;

/// Root attribute and toggle presentation for the active theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeVm {
    pub data_theme: &'static str,
    pub icon: &'static str,
    pub toggle_label: &'static str,
}

#[must_use]
pub fn map_theme(theme: Theme) -> ThemeVm {
    ThemeVm {
        data_theme: theme.as_str(),
        icon: theme.icon(),
        toggle_label: theme.toggle_label(),
    }
}
