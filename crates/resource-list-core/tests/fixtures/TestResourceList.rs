// @generated by resource-list. Do not edit.
// package: fixtures

/// Lists the resources recorded in `/tests/fixtures/resource-list.test-resources`.
///
/// `absolute()` yields entries with a leading `/`; `relative()` yields them as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TestResourceList {
    prefix: &'static str,
}

#[allow(dead_code)]
impl TestResourceList {
    const CONTENT: &'static str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/resource-list.test-resources"));

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
