//! Fragments included around a test page.

use crate::includer::IncluderConfig;

/// A page name to look up and the marker emitted when it is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentRef<'a> {
    /// Inherited page name, e.g. `SetUp`.
    pub name: &'a str,
    /// Directive marker, e.g. `=setup`.
    pub marker: &'static str,
}

/// Kinds of fragment, in the order they appear in a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    /// Suite-level setup, only in suite renders.
    SuiteSetUp,
    /// Page-level setup.
    SetUp,
    /// Page-count marker.
    ///
    /// Looks up the same page as [`SetUp`](Self::SetUp) under a second
    /// marker, so a resolved setup page appears twice.
    PageCount,
    /// Page-level teardown.
    TearDown,
    /// Suite-level teardown, only in suite renders.
    SuiteTearDown,
}

const PAGE_SEQUENCE: &[FragmentKind] = &[
    FragmentKind::SetUp,
    FragmentKind::PageCount,
    FragmentKind::TearDown,
];

const SUITE_SEQUENCE: &[FragmentKind] = &[
    FragmentKind::SuiteSetUp,
    FragmentKind::SetUp,
    FragmentKind::PageCount,
    FragmentKind::TearDown,
    FragmentKind::SuiteTearDown,
];

impl FragmentKind {
    /// Fragments included for a test page, in output order.
    #[must_use]
    pub fn sequence(suite: bool) -> &'static [Self] {
        if suite { SUITE_SEQUENCE } else { PAGE_SEQUENCE }
    }

    /// Directive marker for this fragment.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::SetUp => "=setup",
            Self::SuiteSetUp | Self::PageCount => "-setup",
            Self::TearDown | Self::SuiteTearDown => "-teardown",
        }
    }

    /// Page name this fragment resolves under `config`.
    #[must_use]
    pub fn page_name(self, config: &IncluderConfig) -> &str {
        match self {
            Self::SuiteSetUp => &config.suite_setup_name,
            Self::SetUp | Self::PageCount => &config.setup_name,
            Self::TearDown => &config.teardown_name,
            Self::SuiteTearDown => &config.suite_teardown_name,
        }
    }

    /// Name and marker for this fragment under `config`.
    #[must_use]
    pub fn reference(self, config: &IncluderConfig) -> FragmentRef<'_> {
        FragmentRef {
            name: self.page_name(config),
            marker: self.marker(),
        }
    }
}
