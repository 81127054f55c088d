use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Label, control, help text and the field's validation message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            { for props.children.iter() }
            {if let Some(description) = props.description.as_ref() {
                html! { <p class="form-description">{description.clone()}</p> }
            } else { html! {} }}
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="form-error">{error}</p> }
            } else { html! {} }}
        </div>
    }
}
