//! UI-only state: modes and focus.

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Which button column receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    DataPlugins,
    Visualizations,
}

impl Focus {
    /// The other column.
    pub fn toggle(self) -> Self {
        match self {
            Focus::DataPlugins => Focus::Visualizations,
            Focus::Visualizations => Focus::DataPlugins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::default(), Focus::DataPlugins);
        assert_eq!(Focus::DataPlugins.toggle(), Focus::Visualizations);
        assert_eq!(Focus::DataPlugins.toggle().toggle(), Focus::DataPlugins);
    }
}
