use log::debug;
use shared::LoginRequest;
use validator::Validate;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    // Redirect to the dashboard once authenticated
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.player.is_some(), move |authenticated| {
            if *authenticated {
                debug!("Player already authenticated, redirecting to dashboard");
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            if request.validate().is_err() {
                error.set(
                    "Please enter a valid email and a password of at least 8 characters"
                        .to_string(),
                );
                return;
            }

            error.set(String::new());
            auth.login.emit((request.email, request.password));
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    // Local validation errors take precedence over backend ones
    let shown_error = if !error.is_empty() {
        Some((*error).clone())
    } else {
        auth.state.error.clone()
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold text-white mb-6 text-center">{"Sign in to Pongboard"}</h1>

                if let Some(err) = shown_error {
                    <div class="mb-4 p-3 bg-red-900/40 border border-red-700 rounded-md text-red-300 text-sm">
                        {err}
                    </div>
                }

                <form {onsubmit}>
                    <div class="mb-4">
                        <label class="block text-sm text-gray-400 mb-1" for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            value={(*email).clone()}
                            onchange={onemailchange}
                            class="w-full px-3 py-2 rounded-md bg-gray-700 text-white border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-sm text-gray-400 mb-1" for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={(*password).clone()}
                            onchange={onpasswordchange}
                            class="w-full px-3 py-2 rounded-md bg-gray-700 text-white border border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={auth.state.loading}
                        class="w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 font-semibold"
                    >
                        {if auth.state.loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
