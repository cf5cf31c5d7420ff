use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WinLossPieProps {
    pub wins: i32,
    pub losses: i32,
    /// Precomputed whole-percent win rate shown in the center
    pub winrate: i32,
}

/// Win/loss donut. The green arc length is the win share of the full
/// circumference; a player with no games renders an all-red ring with 0%.
#[function_component(WinLossPie)]
pub fn win_loss_pie(props: &WinLossPieProps) -> Html {
    const RADIUS: f64 = 40.0;
    let circumference = std::f64::consts::TAU * RADIUS;

    let games = props.wins + props.losses;
    let win_fraction = if games > 0 {
        props.wins as f64 / games as f64
    } else {
        0.0
    };
    let win_arc = circumference * win_fraction;

    html! {
        <div class="relative w-32 h-32 shrink-0">
            <svg viewBox="0 0 100 100" class="w-full h-full -rotate-90">
                <circle
                    cx="50" cy="50" r="40"
                    fill="none" stroke="#dc2626" stroke-width="12"
                />
                <circle
                    cx="50" cy="50" r="40"
                    fill="none" stroke="#16a34a" stroke-width="12"
                    stroke-dasharray={format!("{:.2} {:.2}", win_arc, circumference)}
                />
            </svg>
            <div class="absolute inset-0 flex items-center justify-center">
                <span class="font-bold text-white">{format!("{}%", props.winrate)}</span>
            </div>
        </div>
    }
}
