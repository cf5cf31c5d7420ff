use shared::MatchDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MatchRowProps {
    pub record: MatchDto,
    /// The player whose history is being displayed; decides the WIN/LOSS badge
    pub viewer_id: AttrValue,
}

/// One row of the match-history list.
#[function_component(MatchRow)]
pub fn match_row(props: &MatchRowProps) -> Html {
    let record = &props.record;
    let won = record.is_win_for(&props.viewer_id);

    let badge_class = if won {
        "px-2 py-1 rounded text-white text-xs w-14 text-center bg-green-600"
    } else {
        "px-2 py-1 rounded text-white text-xs w-14 text-center bg-red-600"
    };

    html! {
        <div class="grid grid-cols-5 p-3 justify-items-center items-center border-b border-gray-700 hover:bg-gray-700 transition-colors">
            <span class="text-sm">
                {record.played_at.format("%b %d, %Y %H:%M").to_string()}
            </span>
            <span class="capitalize border border-amber-600 text-amber-600 rounded-lg px-2 py-1 text-xs text-center">
                {record.match_type.label()}
            </span>
            <span>{record.score_line()}</span>
            <div>
                if record.play_time.minutes > 0 {
                    <span>
                        {record.play_time.minutes}
                        <i class="text-gray-300 text-xs">{"m"}</i>
                    </span>
                }
                <span>
                    {record.play_time.seconds}
                    <i class="text-gray-300 text-xs">{"s"}</i>
                </span>
            </div>
            <span class={badge_class}>
                {if won { "WIN" } else { "LOSS" }}
            </span>
        </div>
    }
}
