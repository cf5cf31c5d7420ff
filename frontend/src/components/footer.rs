use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-900 border-t border-gray-800 py-4">
            <div class="max-w-6xl mx-auto px-4 text-center text-sm text-gray-500">
                {"Pongboard. Pick up your paddle, the table is waiting."}
            </div>
        </footer>
    }
}
