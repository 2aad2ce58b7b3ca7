//! Which Airbnb config packages a run needs.

use crate::constants::{BASE_ALIASES, BASE_STYLE, FULL_STYLE, TYPESCRIPT_CONFIG, config_package};

/// Airbnb style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// `airbnb`, including React and JSX rules
    #[default]
    Full,
    /// `airbnb-base`
    Base,
}

/// Ordered, non-empty list of configuration names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSelection {
    style: Style,
    names: Vec<&'static str>,
}

impl ConfigSelection {
    /// Select the style config, followed by the TypeScript config when requested.
    pub fn new(style: Style, typescript: bool) -> Self {
        let mut names = vec![match style {
            Style::Full => FULL_STYLE,
            Style::Base => BASE_STYLE,
        }];
        if typescript {
            names.push(TYPESCRIPT_CONFIG);
        }
        Self { style, names }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn has_typescript(&self) -> bool {
        self.names.contains(&TYPESCRIPT_CONFIG)
    }

    /// Installable `eslint-config-<name>@latest` references, in selection order.
    pub fn packages(&self) -> Vec<String> {
        self.names.iter().map(|name| config_package(name)).collect()
    }

    /// Names as they appear in `extends`.
    ///
    /// Under the base style, configs with a dedicated base entry point are
    /// remapped to it; everything else is kept verbatim.
    pub fn extends_names(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|&name| match self.style {
                Style::Base => base_alias(name).unwrap_or(name).to_string(),
                Style::Full => name.to_string(),
            })
            .collect()
    }
}

fn base_alias(name: &str) -> Option<&'static str> {
    BASE_ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}
