use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Extra class for the value text, e.g. "text-green-600"
    #[prop_or_default]
    pub accent: Option<AttrValue>,
}

/// One summary figure on the overview panel. Pure presentation: the value
/// arrives fully computed.
#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    let value_class = match &props.accent {
        Some(accent) => format!("text-2xl font-bold {}", accent),
        None => "text-2xl font-bold text-gray-900".to_string(),
    };

    html! {
        <div class="bg-gray-900/40 rounded-xl p-4 text-center">
            <p class="text-sm font-medium text-gray-400">{props.label.clone()}</p>
            <p class={value_class}>{props.value.clone()}</p>
        </div>
    }
}
