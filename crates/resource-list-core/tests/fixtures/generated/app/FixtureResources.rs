// @generated by resource-list. Do not edit.
// package: app

/// Lists the resources recorded in `/META-INF/fixture.resources`.
///
/// `absolute()` yields entries with a leading `/`; `relative()` yields them as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FixtureResources {
    prefix: &'static str,
}

#[allow(dead_code)]
impl FixtureResources {
    const CONTENT: &'static str = include_str!(concat!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/generated/classes"), "/META-INF/fixture.resources"));

    const ABSOLUTE: Self = Self { prefix: "/" };
    const RELATIVE: Self = Self { prefix: "" };

    pub(crate) const fn absolute() -> Self {
        Self::ABSOLUTE
    }

    pub(crate) const fn relative() -> Self {
        Self::RELATIVE
    }

    /// Lazily yields each resource; the iterator is single-pass.
    pub(crate) fn stream(self) -> impl Iterator<Item = String> {
        let prefix = self.prefix;
        Self::CONTENT.lines().map(move |line| format!("{prefix}{line}"))
    }

    pub(crate) fn list(self) -> Vec<String> {
        self.stream().collect()
    }

    /// Runs `action` for each resource, stopping at and returning its first error.
    pub(crate) fn for_each<E, F>(self, action: F) -> Result<(), E>
    where
        F: FnMut(String) -> Result<(), E>,
    {
        self.stream().try_for_each(action)
    }
}
