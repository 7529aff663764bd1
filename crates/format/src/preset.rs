//! Named format presets.

/// A named, predefined symbolic format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Lookup key (lowercase).
    pub key: &'static str,
    /// Symbolic template the key expands to.
    pub template: &'static str,
    /// Human-readable description with a sample rendering.
    pub description: &'static str,
}

/// All built-in presets, in listing order.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "ymd",
        template: "YYYYMMDD",
        description: "Year-Month-Day (e.g. 20241231)",
    },
    Preset {
        key: "dmy",
        template: "DDMMYYYY",
        description: "Day-Month-Year (e.g. 31122024)",
    },
    Preset {
        key: "mdy",
        template: "MMDDYYYY",
        description: "Month-Day-Year (e.g. 12312024)",
    },
    Preset {
        key: "dmys",
        template: "DDMMYY",
        description: "Day-Month-Short year (e.g. 311224)",
    },
    Preset {
        key: "ymds",
        template: "YYMMDD",
        description: "Short year-Month-Day (e.g. 241231)",
    },
    Preset {
        key: "mdys",
        template: "MMDDYY",
        description: "Month-Day-Short year (e.g. 123124)",
    },
];

/// Looks up a preset by key, case-insensitively.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let lowered = name.to_lowercase();
    PRESETS.iter().find(|preset| preset.key == lowered)
}
