//! Page-name variants tried when only a company name is known.

/// One rule for turning a company name into a candidate page name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// The name as given.
    Verbatim,
    /// The name with a fixed suffix appended.
    Suffix(&'static str),
    /// The name with every space replaced by `_`.
    SpacesToUnderscores,
}

/// Candidate rules, in the order they are tried.
pub const PAGE_VARIANTS: [PageVariant; 5] = [
    PageVariant::Verbatim,
    PageVariant::Suffix("_Inc."),
    PageVariant::Suffix(",_Inc."),
    PageVariant::Suffix("_(company)"),
    PageVariant::SpacesToUnderscores,
];

impl PageVariant {
    /// Applies the rule to `name`.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Verbatim => name.to_string(),
            Self::Suffix(suffix) => format!("{name}{suffix}"),
            Self::SpacesToUnderscores => name.replace(' ', "_"),
        }
    }
}

/// Expands `name` through [`PAGE_VARIANTS`], dropping candidates already produced.
#[must_use]
pub fn candidates(name: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(PAGE_VARIANTS.len());
    for variant in PAGE_VARIANTS {
        let candidate = variant.apply(name);
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}
