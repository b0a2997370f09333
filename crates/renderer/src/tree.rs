use std::collections::{HashMap, HashSet};
use toolbar_config::StyleConfig;
use toolbar_core::{Result, ToolbarError};
use toolbar_theme::{StyleEnv, ToolbarStyle};

/// A named node in the view hierarchy.
///
/// A node's style override applies to the node itself and every descendant
/// unless a nearer node overrides it again.
#[derive(Debug, Clone)]
pub struct ViewNode {
    name:     String,
    style:    Option<ToolbarStyle>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn child(mut self, node: ViewNode) -> Self {
        self.children.push(node);
        self
    }

    /// Apply a toolbar style to this subtree, replacing any style already
    /// set on this node.
    #[must_use]
    pub fn toolbar_style(mut self, style: ToolbarStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The override set directly on this node, if any.
    pub fn style(&self) -> Option<&ToolbarStyle> {
        self.style.as_ref()
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    /// The environment this node and its descendants see, given the one
    /// inherited from the parent.
    pub fn env_for(&self, inherited: &StyleEnv) -> StyleEnv {
        match self.style {
            Some(style) => inherited.with_override(style),
            None => inherited.clone(),
        }
    }

    /// Depth-first walk; `f` receives each node, its environment and depth.
    pub fn visit<F>(&self, inherited: &StyleEnv, f: &mut F)
    where
        F: FnMut(&ViewNode, &StyleEnv, usize),
    {
        self.visit_at(inherited, 0, f);
    }

    fn visit_at<F>(&self, inherited: &StyleEnv, depth: usize, f: &mut F)
    where
        F: FnMut(&ViewNode, &StyleEnv, usize),
    {
        let env = self.env_for(inherited);
        f(self, &env, depth);
        for child in &self.children {
            child.visit_at(&env, depth + 1, f);
        }
    }

    /// Resolve the toolbar style at the node reached by `path`, a list of
    /// names starting with this node's own.
    pub fn style_at(&self, path: &[&str]) -> Result<ToolbarStyle> {
        let unknown = || ToolbarError::UnknownNode(path.join("/"));

        let (first, rest) = path.split_first().ok_or_else(unknown)?;
        if *first != self.name {
            return Err(unknown());
        }

        let mut node = self;
        let mut env = node.env_for(&StyleEnv::new());
        for name in rest {
            node = node
                .children
                .iter()
                .find(|c| c.name == *name)
                .ok_or_else(unknown)?;
            env = node.env_for(&env);
        }
        Ok(env.resolve())
    }

    /// Attach a style to every node whose name appears in `scopes`.
    /// Returns the scope names that styled at least one node.
    pub fn apply_scopes<'s>(&mut self, scopes: &'s HashMap<String, StyleConfig>) -> HashSet<&'s str> {
        let mut matched = HashSet::new();
        self.apply_scopes_into(scopes, &mut matched);
        matched
    }

    fn apply_scopes_into<'s>(
        &mut self,
        scopes: &'s HashMap<String, StyleConfig>,
        matched: &mut HashSet<&'s str>,
    ) {
        if let Some((name, cfg)) = scopes.get_key_value(&self.name) {
            tracing::debug!("Applying toolbar style scope '{name}'");
            self.style = Some(ToolbarStyle::from_config(cfg));
            matched.insert(name.as_str());
        }
        for child in &mut self.children {
            child.apply_scopes_into(scopes, matched);
        }
    }
}
