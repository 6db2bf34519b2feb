use uuid::Uuid;
use yew::events::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Modal sheet sliding in from the top of the viewport. Used by the file viewer.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let title_id = format!("{}-title", self.id);
        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <>
                <div class="top-sheet-backdrop" onclick={on_backdrop} />
                <div
                    class={classes!("top-sheet", "show")}
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                >
                    <div class="top-sheet-header">
                        <h3 id={title_id}>{ &props.title }</h3>
                        <button class="top-sheet-close" title="Close" onclick={on_close}>{ "✕" }</button>
                    </div>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </>
        }
    }
}
