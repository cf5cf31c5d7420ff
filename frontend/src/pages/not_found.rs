use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900">
            <h1 class="text-5xl font-bold text-white mb-4">{"404"}</h1>
            <p class="text-gray-400 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
