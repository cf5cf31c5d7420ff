use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth.logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <nav class="bg-gray-900 border-b border-gray-800">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="text-xl font-bold text-white">
                    {"Pongboard"}
                </Link<Route>>

                if let Some(player) = &auth.state.player {
                    <div class="flex items-center space-x-4">
                        <span class="text-gray-300">{player.handle.clone()}</span>
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                        >
                            {"Log out"}
                        </button>
                    </div>
                } else {
                    <Link<Route> to={Route::Login} classes="px-3 py-1.5 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        {"Log in"}
                    </Link<Route>>
                }
            </div>
        </nav>
    }
}
