//! Identity update wizard: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, submit
//! orchestration, view rendering and helpers.
//!
//! On first render the wizard loads the department and province catalogs in
//! one parallel round trip; everything else is driven by user actions through
//! `update::update`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod submit;
mod update;
mod view;

pub use messages::Msg;
pub use props::WizardProps;
pub use state::WizardComponent;

impl Component for WizardComponent {
    type Message = Msg;
    type Properties = WizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WizardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadCatalogs);
        }
    }
}
