use gloo_storage::{LocalStorage, Storage};
use log::{error, warn};
use shared::{PlayerDto, SharedError};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::auth;

#[derive(Clone, Debug)]
pub struct AuthState {
    pub player: Option<PlayerDto>,
    /// True while a stored session is being validated or a login is in
    /// flight. The identity is undecided until this clears.
    pub loading: bool,
    pub error: Option<String>,
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.error == other.error
            && match (&self.player, &other.player) {
                (Some(a), Some(b)) => a.id == b.id,
                (None, None) => true,
                _ => false,
            }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            player: None,
            loading: false,
            error: None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SessionValidated(PlayerDto),
    SessionExpired,
    SessionCheckFailed(String),
    Login,
    LoginSuccess { player: PlayerDto, session_id: String },
    LoginError(String),
    Logout,
    LogoutSuccess,
    LogoutError(String),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SessionValidated(player) => {
                // Refresh the cached copy in case counters moved server-side
                if let Err(e) = LocalStorage::set("player", &player) {
                    error!("Failed to update player in local storage: {}", e);
                }
                Rc::new(Self {
                    player: Some(player),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::SessionExpired => {
                let _ = LocalStorage::delete("player");
                let _ = LocalStorage::delete("session_id");
                Rc::new(Self {
                    player: None,
                    loading: false,
                    error: Some("Session expired. Please log in again.".to_string()),
                })
            }
            AuthAction::SessionCheckFailed(_) => {
                // Transient failure: keep the cached identity and move on
                Rc::new(Self {
                    loading: false,
                    ..(*self).clone()
                })
            }
            AuthAction::Login => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess { player, session_id } => {
                if let Err(e) = LocalStorage::set("player", &player) {
                    error!("Failed to store player in local storage: {}", e);
                }
                if let Err(e) = LocalStorage::set("session_id", &session_id) {
                    error!("Failed to store session_id in local storage: {}", e);
                }
                Rc::new(Self {
                    player: Some(player),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LoginError(error) => Rc::new(Self {
                player: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::Logout => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LogoutSuccess => {
                let _ = LocalStorage::delete("player");
                let _ = LocalStorage::delete("session_id");
                Rc::new(Self {
                    player: None,
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LogoutError(error) => Rc::new(Self {
                loading: false,
                error: Some(error),
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore the cached identity; it stays provisional until the stored
    // session has been validated against the backend.
    let player: Option<PlayerDto> = LocalStorage::get("player").ok();
    let has_session = player.is_some()
        && LocalStorage::get::<String>("session_id").is_ok();
    let auth = use_reducer_eq(move || AuthState {
        player,
        loading: has_session,
        ..Default::default()
    });

    // Validate the restored session once on startup
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            if has_session {
                spawn_local(async move {
                    match auth::get_current_player().await {
                        Ok(player) => auth.dispatch(AuthAction::SessionValidated(player)),
                        Err(SharedError::Unauthorized(_)) => {
                            auth.dispatch(AuthAction::SessionExpired)
                        }
                        Err(e) => {
                            warn!("Session check failed, keeping cached identity: {}", e);
                            auth.dispatch(AuthAction::SessionCheckFailed(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    // Handle login
    let login = {
        let auth = auth.clone();
        Callback::from(move |(email, password): (String, String)| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::Login);

                match auth::login(&email, &password).await {
                    Ok(response) => {
                        auth.dispatch(AuthAction::LoginSuccess {
                            player: response.player,
                            session_id: response.session_id,
                        });
                    }
                    Err(e) => {
                        auth.dispatch(AuthAction::LoginError(e));
                    }
                }
            });
        })
    };

    // Handle logout
    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::Logout);

                match auth::logout().await {
                    Ok(()) => {
                        auth.dispatch(AuthAction::LogoutSuccess);
                    }
                    Err(e) => {
                        auth.dispatch(AuthAction::LogoutError(e));
                    }
                }
            });
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
