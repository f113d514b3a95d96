//! Shortcut catalog - the static tmux dataset and its display order

/// A single keyboard shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub description: String,
    pub category: String,
}

impl Shortcut {
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// A named category and its entries, in dataset order
#[derive(Debug, Clone)]
pub struct Category<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a Shortcut>,
}

/// Default tmux bindings as (key, description, category)
const TMUX_SHORTCUTS: &[(&str, &str, &str)] = &[
    // Sessions
    ("Prefix d", "Detach from session", "Sessions"),
    ("Prefix s", "List sessions", "Sessions"),
    ("Prefix $", "Rename session", "Sessions"),
    // Windows
    ("Prefix c", "Create new window", "Windows"),
    ("Prefix ,", "Rename window", "Windows"),
    ("Prefix w", "List windows", "Windows"),
    ("Prefix f", "Find window", "Windows"),
    ("Prefix &", "Kill window", "Windows"),
    ("Prefix .", "Move window", "Windows"),
    ("Prefix p", "Previous window", "Windows"),
    ("Prefix n", "Next window", "Windows"),
    ("Prefix 0-9", "Select window by number", "Windows"),
    ("Prefix l", "Last selected window", "Windows"),
    // Pane splitting & navigation
    ("Prefix %", "Split horizontally", "Pane Splitting & Nav"),
    ("Prefix \"", "Split vertically", "Pane Splitting & Nav"),
    ("Prefix o", "Next pane", "Pane Splitting & Nav"),
    ("Prefix ;", "Last pane", "Pane Splitting & Nav"),
    ("Prefix Arrow", "Navigate panes", "Pane Splitting & Nav"),
    // Pane management
    ("Prefix x", "Kill pane", "Pane Management"),
    ("Prefix {", "Move pane left", "Pane Management"),
    ("Prefix }", "Move pane right", "Pane Management"),
    ("Prefix Space", "Next layout", "Pane Management"),
    ("Prefix z", "Toggle zoom pane", "Pane Management"),
    ("Prefix !", "Break pane to new window", "Pane Management"),
    ("Prefix q", "Show pane numbers", "Pane Management"),
    // Copy mode
    ("Prefix [", "Enter copy mode", "Copy Mode"),
    ("v", "Start selection (vi)", "Copy Mode"),
    ("y", "Copy selection (vi)", "Copy Mode"),
    ("Prefix ]", "Paste buffer", "Copy Mode"),
    // Misc
    ("Prefix t", "Show clock", "Misc"),
    ("Prefix :", "Enter command prompt", "Misc"),
    ("Prefix ?", "List all shortcuts", "Misc"),
];

/// Order in which categories are displayed
const TMUX_CATEGORY_ORDER: &[&str] = &[
    "Sessions",
    "Windows",
    "Pane Splitting & Nav",
    "Pane Management",
    "Misc",
    "Copy Mode",
];

/// Immutable set of shortcuts plus the order their categories are shown in
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shortcuts: Vec<Shortcut>,
    order: Vec<String>,
}

impl Catalog {
    pub fn new(shortcuts: Vec<Shortcut>, order: Vec<String>) -> Self {
        Self { shortcuts, order }
    }

    /// The built-in tmux cheatsheet
    pub fn tmux() -> Self {
        let shortcuts = TMUX_SHORTCUTS
            .iter()
            .map(|&(key, description, category)| Shortcut::new(key, description, category))
            .collect();
        let order = TMUX_CATEGORY_ORDER.iter().map(|s| s.to_string()).collect();
        Self::new(shortcuts, order)
    }

    /// Replace every occurrence of `placeholder` in the keys with `label`
    pub fn with_prefix(mut self, placeholder: &str, label: &str) -> Self {
        if placeholder.is_empty() {
            return self;
        }
        for shortcut in &mut self.shortcuts {
            shortcut.key = shortcut.key.replace(placeholder, label);
        }
        self
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Categories in display order. Listed categories with no entries are
    /// still returned, with an empty entry list.
    pub fn categories(&self) -> Vec<Category<'_>> {
        self.order
            .iter()
            .map(|name| Category {
                name: name.as_str(),
                entries: self
                    .shortcuts
                    .iter()
                    .filter(|s| s.category == *name)
                    .collect(),
            })
            .collect()
    }

    /// Dataset categories that never appear in the display order
    pub fn unlisted(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for shortcut in &self.shortcuts {
            let name = shortcut.category.as_str();
            if !self.order.iter().any(|o| o == name) && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}
