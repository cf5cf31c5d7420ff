use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthContext, AuthProvider};
use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod observer;
pub mod pagination;
pub mod pages {
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
}

use pages::{dashboard::Dashboard, login::Login, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen flex flex-col bg-gray-900">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let is_authenticated = auth.state.player.is_some();
    // While the stored session is being validated the identity is
    // undecided; don't bounce the user to the login page yet.
    let is_pending = auth.state.loading;

    {
        let navigator = navigator.clone();
        use_effect_with((is_authenticated, is_pending), move |(is_auth, pending)| {
            if !*is_auth && !*pending {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if is_authenticated || is_pending {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => {
            debug!("Rendering Dashboard component (protected)");
            html! {
                <ProtectedRoute>
                    <Dashboard />
                </ProtectedRoute>
            }
        }
        Route::Login => {
            debug!("Rendering Login component");
            html! { <Login /> }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing application...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
