//! Properties for the `WizardComponent`.

use yew::prelude::*;

/// Configuration passed by the parent. The wizard ships in two variants that
/// differ only in the required asset slots.
#[derive(Properties, PartialEq, Clone)]
pub struct WizardProps {
    /// When `true` the wizard requires a third asset slot (a signature image)
    /// in addition to the two ID-card sides, and submission is blocked until
    /// all three have a local file selected.
    #[prop_or_default]
    pub require_signature: bool,
}
