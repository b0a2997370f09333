use crate::style::ToolbarStyle;
use std::sync::Arc;

/// Toolbar style in effect at some point of a view tree.
///
/// Passed down explicitly while building or walking the tree.  Overriding
/// returns a new environment for the subtree; the receiver is unchanged, so
/// siblings keep seeing what their parent saw.  Clones share their scopes.
#[derive(Debug, Clone, Default)]
pub struct StyleEnv {
    innermost: Option<Arc<Scope>>,
}

#[derive(Debug)]
struct Scope {
    style:  ToolbarStyle,
    parent: Option<Arc<Scope>>,
}

impl StyleEnv {
    /// An environment with no overrides; it resolves to the standard style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `style` for everything resolved through the returned environment.
    #[must_use]
    pub fn with_override(&self, style: ToolbarStyle) -> Self {
        Self {
            innermost: Some(Arc::new(Scope {
                style,
                parent: self.innermost.clone(),
            })),
        }
    }

    /// The nearest override, or [`ToolbarStyle::STANDARD`] when there is none.
    pub fn resolve(&self) -> ToolbarStyle {
        self.innermost
            .as_ref()
            .map_or(ToolbarStyle::STANDARD, |scope| scope.style)
    }

    pub fn is_overridden(&self) -> bool {
        self.innermost.is_some()
    }

    /// Number of stacked overrides.
    pub fn depth(&self) -> usize {
        self.overrides().count()
    }

    /// Every override in scope, innermost first.
    pub fn overrides(&self) -> impl Iterator<Item = &ToolbarStyle> + '_ {
        std::iter::successors(self.innermost.as_deref(), |scope| scope.parent.as_deref())
            .map(|scope| &scope.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall() -> ToolbarStyle {
        ToolbarStyle::STANDARD.with_toolbar_height(80.0)
    }

    fn tight() -> ToolbarStyle {
        ToolbarStyle::STANDARD.with_item_spacing(4.0)
    }

    #[test]
    fn empty_env_resolves_standard() {
        let env = StyleEnv::new();
        assert_eq!(env.resolve(), ToolbarStyle::STANDARD);
        assert!(!env.is_overridden());
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn repeated_lookups_are_stable() {
        let env = StyleEnv::new();
        assert_eq!(env.resolve(), env.resolve());
        assert_eq!(env.resolve(), ToolbarStyle::STANDARD);
    }

    #[test]
    fn override_is_visible_through_the_new_env() {
        let env = StyleEnv::new().with_override(tall());
        assert_eq!(env.resolve(), tall());
        assert_eq!(env.clone().resolve(), tall());
    }

    #[test]
    fn innermost_override_wins() {
        let outer = StyleEnv::new().with_override(tall());
        let inner = outer.with_override(tight());

        assert_eq!(inner.resolve(), tight());
        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.overrides().copied().collect::<Vec<_>>(), vec![tight(), tall()]);
    }

    #[test]
    fn overriding_leaves_the_parent_env_untouched() {
        let root = StyleEnv::new().with_override(tall());
        let _child = root.with_override(tight());
        let sibling = root.clone();

        assert_eq!(root.resolve(), tall());
        assert_eq!(sibling.resolve(), tall());
        assert_eq!(StyleEnv::new().resolve(), ToolbarStyle::STANDARD);
    }

    #[test]
    fn env_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleEnv>();
    }
}
