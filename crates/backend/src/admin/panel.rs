use std::fmt;
use std::sync::Arc;

use contracts::system::auth::TokenClaims;

use crate::shared::config::CoreConfig;
use crate::system::auth::nonce::NonceIssuer;

/// Everything a panel may use while rendering one page view
pub struct RenderContext<'a> {
    pub user: &'a TokenClaims,
    /// Capability that guards the admin page
    pub capability: &'a str,
    pub nonces: &'a NonceIssuer,
    pub core: &'a CoreConfig,
}

impl RenderContext<'_> {
    pub fn user_can_manage(&self) -> bool {
        self.user.can(self.capability)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("access denied")]
    AccessDenied,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Renders a panel body into the page buffer.
///
/// Output is buffered by the caller; returning an error discards everything
/// written so far for the whole page.
pub trait PanelRenderer: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>, out: &mut String) -> Result<(), RenderError>;
}

impl<F> PanelRenderer for F
where
    F: Fn(&RenderContext<'_>, &mut String) -> Result<(), RenderError> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext<'_>, out: &mut String) -> Result<(), RenderError> {
        self(ctx, out)
    }
}

/// A registered panel. Only the registry constructs these, so the id is
/// always normalized and the label non-empty.
#[derive(Clone)]
pub struct Panel {
    pub(super) id: String,
    pub(super) label: String,
    pub(super) renderer: Arc<dyn PanelRenderer>,
}

impl Panel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self, ctx: &RenderContext<'_>, out: &mut String) -> Result<(), RenderError> {
        self.renderer.render(ctx, out)
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Registration input as supplied by a module
#[derive(Clone, Default)]
pub struct PanelDefinition {
    pub id: String,
    pub label: String,
    pub renderer: Option<Arc<dyn PanelRenderer>>,
}

impl PanelDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        renderer: impl PanelRenderer + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            renderer: Some(Arc::new(renderer)),
        }
    }

    /// Same as `new`, but lets closures infer their argument types
    pub fn from_fn<F>(id: impl Into<String>, label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&RenderContext<'_>, &mut String) -> Result<(), RenderError> + Send + Sync + 'static,
    {
        Self::new(id, label, render)
    }
}
