use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Modal sheet over a backdrop. Clicking the backdrop or the close button
/// calls `on_close`; clicks inside the sheet do not.
pub struct Sheet;

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
        let on_button = props.on_close.reform(|_: MouseEvent| ());
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="sheet-backdrop show" onclick={on_backdrop}>
                <div class="sheet show" onclick={keep_open}>
                    <div class="sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="close-btn" onclick={on_button}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
