use gloo_timers::callback::Timeout;
use log::error;
use shared::{MatchDto, PlayerDto, PlayerTimeStatsDto, WeekStatsDto};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::api::dashboard as api;
use crate::auth::AuthContext;
use crate::components::dashboard::match_row::MatchRow;
use crate::components::dashboard::pie_chart::WinLossPie;
use crate::components::dashboard::stat_tile::StatTile;
use crate::components::dashboard::week_chart::WeekChart;
use crate::observer::SentinelObserver;
use crate::pagination::{LoadingState, Pager};

/// Simulated backend round-trip for a growth request. The match list is
/// already local; the delay keeps the observable state sequence identical
/// to a real paginated fetch.
const GROWTH_DELAY_MS: u32 = 1_000;

struct DashboardData {
    matches: Vec<MatchDto>,
    time_stats: PlayerTimeStatsDto,
    week_stats: Vec<WeekStatsDto>,
}

/// All-or-nothing initial load: any failed read aborts the whole thing.
async fn fetch_dashboard(player_id: &str) -> Result<DashboardData, String> {
    let matches = api::get_player_matches(player_id).await?;
    let time_stats = api::get_time_stats(player_id).await?;
    let week_stats = api::get_week_stats(player_id).await?;
    Ok(DashboardData {
        matches,
        time_stats,
        week_stats,
    })
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");

    let player = use_state(|| None::<PlayerDto>);
    let time_stats = use_state(|| None::<PlayerTimeStatsDto>);
    let week_stats = use_state(Vec::<WeekStatsDto>::new);
    let visible_matches = use_state(Vec::<MatchDto>::new);

    // Rendered view of the loading machine
    let loading = use_state(|| LoadingState::Initial);
    // Authoritative machine state. Long-lived callbacks (observer, timer)
    // must read the current phase, not the one captured at render time, so
    // the cell is the authority and `loading` mirrors it for the view.
    let phase = use_mut_ref(|| LoadingState::Initial);
    let pager = use_mut_ref(|| None::<Pager<MatchDto>>);
    let pending_growth = use_mut_ref(|| None::<Timeout>);
    // Bumped whenever the identity changes; a fetch that resolves for an
    // older session number is discarded.
    let session = use_mut_ref(|| 0u64);
    let observer_armed = use_state(|| false);
    let sentinel = use_node_ref();

    let auth_loading = auth.state.loading;
    let auth_player = auth.state.player.clone();
    let player_id = auth_player
        .as_ref()
        .map(|p| p.id.clone())
        .unwrap_or_default();

    // One-time load per identity: waits out auth resolution, fetches all
    // four data slots, seeds the pager and arms the sentinel. Re-runs from
    // Initial when the identity changes; the cleanup cancels a pending
    // growth timer so no stale closure can touch the next session.
    {
        let player = player.clone();
        let time_stats = time_stats.clone();
        let week_stats = week_stats.clone();
        let visible_matches = visible_matches.clone();
        let loading = loading.clone();
        let phase = phase.clone();
        let pager = pager.clone();
        let pending_growth = pending_growth.clone();
        let session = session.clone();
        let observer_armed = observer_armed.clone();

        use_effect_with((player_id.clone(), auth_loading), move |_| {
            pending_growth.borrow_mut().take();
            *session.borrow_mut() += 1;
            let this_session = *session.borrow();
            *phase.borrow_mut() = LoadingState::Initial;
            *pager.borrow_mut() = None;
            loading.set(LoadingState::Initial);
            observer_armed.set(false);

            if let (Some(identity), false) = (auth_player, auth_loading) {
                let session = session.clone();
                spawn_local(async move {
                    let result = fetch_dashboard(&identity.id).await;
                    if *session.borrow() != this_session {
                        // Identity changed while the fetch was in flight
                        return;
                    }
                    match result {
                        Ok(data) => {
                            let new_pager = Pager::new(data.matches);
                            visible_matches.set(new_pager.visible().to_vec());
                            *pager.borrow_mut() = Some(new_pager);
                            player.set(Some(identity));
                            time_stats.set(Some(data.time_stats));
                            week_stats.set(data.week_stats);
                            *phase.borrow_mut() = LoadingState::Idle;
                            loading.set(LoadingState::Idle);
                            observer_armed.set(true);
                        }
                        Err(err) => {
                            // Known gap: no retry and no error surface; the
                            // page stays on its spinner.
                            error!("Failed to load dashboard data: {}", err);
                        }
                    }
                });
            }

            move || {
                pending_growth.borrow_mut().take();
            }
        });
    }

    // Growth request from the sentinel. Accepted only when idle and not
    // exhausted; one request may be outstanding at a time, so a fast
    // re-intersection during the delay window cannot double-advance.
    let on_sentinel_enter = {
        let loading = loading.clone();
        let phase = phase.clone();
        let pager = pager.clone();
        let visible_matches = visible_matches.clone();
        let pending_growth = pending_growth.clone();

        Callback::from(move |_| {
            if !phase.borrow().accepts_growth() {
                return;
            }
            if pager.borrow().as_ref().map_or(true, |p| p.is_exhausted()) {
                // List exhausted: the sentinel stays inert for this session
                return;
            }

            *phase.borrow_mut() = LoadingState::LoadingMore;
            loading.set(LoadingState::LoadingMore);

            let loading = loading.clone();
            let phase = phase.clone();
            let pager = pager.clone();
            let visible_matches = visible_matches.clone();
            let timer = Timeout::new(GROWTH_DELAY_MS, move || {
                if let Some(p) = pager.borrow_mut().as_mut() {
                    p.grow();
                    visible_matches.set(p.visible().to_vec());
                }
                *phase.borrow_mut() = LoadingState::Idle;
                loading.set(LoadingState::Idle);
            });
            pending_growth.borrow_mut().replace(timer);
        })
    };

    // The sentinel only exists once the loaded dashboard has rendered, so
    // the observer attaches after the first fetch and detaches on teardown
    // or identity change, even mid-fetch.
    {
        let sentinel = sentinel.clone();
        let on_sentinel_enter = on_sentinel_enter.clone();
        use_effect_with(*observer_armed, move |armed| {
            let mut observer = None;
            if *armed {
                if let Some(target) = sentinel.cast::<Element>() {
                    match SentinelObserver::new(on_sentinel_enter) {
                        Ok(obs) => {
                            obs.observe(&target);
                            observer = Some(obs);
                        }
                        Err(err) => error!("Failed to attach sentinel observer: {:?}", err),
                    }
                }
            }
            move || drop(observer)
        });
    }

    if auth_loading || *loading == LoadingState::Initial {
        return html! {
            <div class="flex justify-center items-center h-screen">
                <div class="animate-spin rounded-full h-16 w-16 border-b-2 border-blue-500"></div>
            </div>
        };
    }

    let current = match &*player {
        Some(p) => p.clone(),
        None => return html! {},
    };
    let exhausted = pager.borrow().as_ref().map_or(true, |p| p.is_exhausted());

    html! {
        <div class="flex flex-col mt-8 max-w-6xl mx-auto w-full px-4">
            <div class="flex flex-col lg:flex-row gap-5 mb-5">
                <div class="rounded-xl bg-gray-800 w-full lg:w-1/3 p-8 flex flex-col items-center justify-center text-center">
                    <p class="mb-3 font-bold text-white text-lg">{"Ping Pong"}</p>
                    <p class="text-gray-300 mb-6">{"Pick up your paddle, the table is waiting!"}</p>
                    <a href="/play" class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-semibold">
                        {"Play now"}
                    </a>
                </div>
                <div class="rounded-xl bg-gray-800 w-full lg:w-2/3 p-4 overflow-y-auto">
                    <h2 class="p-2 font-bold text-white">{"OVERVIEW"}</h2>
                    <div class="flex items-center gap-8 pl-6 mb-6">
                        <WinLossPie
                            wins={current.wins}
                            losses={current.losses}
                            winrate={current.winrate()}
                        />
                        <StatTile label="WINS" value={current.wins.to_string()} accent="text-green-500" />
                        <StatTile label="LOSSES" value={current.losses.to_string()} accent="text-red-500" />
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        <StatTile label="Total games" value={current.games().to_string()} />
                        <StatTile label="Level" value={current.level.to_string()} />
                        <StatTile label="Points" value={current.points.to_string()} />
                        if let Some(stats) = &*time_stats {
                            <StatTile label="Total play time" value={stats.total_play_time.format()} />
                            <StatTile label="Avg game duration" value={stats.avg_play_time.format()} />
                            <StatTile label="Longest game" value={stats.longest_play_time.format()} />
                        }
                    </div>
                </div>
            </div>
            <div class="flex flex-col lg:flex-row gap-5 mb-10">
                <div class="rounded-xl bg-gray-800 w-full lg:w-1/3 p-4 h-72">
                    <WeekChart weeks={(*week_stats).clone()} />
                </div>
                <div class="rounded-xl bg-gray-800 w-full lg:w-2/3 flex flex-col h-72">
                    <div class="grid grid-cols-5 py-3 justify-items-center border-b border-gray-700 text-gray-300">
                        <span>{"Date & Time"}</span>
                        <span>{"Type"}</span>
                        <span>{"Score"}</span>
                        <span>{"Duration"}</span>
                        <span>{"Result"}</span>
                    </div>
                    <div class="overflow-y-auto h-full">
                        if visible_matches.is_empty() {
                            <div class="flex flex-col items-center justify-center h-full">
                                <p class="text-gray-400 text-center">
                                    {"No matches played yet. Start your first match!"}
                                </p>
                            </div>
                        } else {
                            {for visible_matches.iter().map(|record| html! {
                                <MatchRow
                                    key={record.id.clone()}
                                    record={record.clone()}
                                    viewer_id={current.id.clone()}
                                />
                            })}
                        }
                        <div class="h-4" ref={sentinel}>
                            if *loading == LoadingState::LoadingMore && !exhausted {
                                <div class="text-center py-4">
                                    <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-blue-500 mx-auto"></div>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
