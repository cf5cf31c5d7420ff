use shared::WeekStatsDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekChartProps {
    pub weeks: Vec<WeekStatsDto>,
}

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 140.0;
const BAR_AREA_HEIGHT: f64 = 120.0;

/// Weekly win/loss bar chart. Pass-through rendering of the server-supplied
/// breakdown, one green/red bar pair per entry.
#[function_component(WeekChart)]
pub fn week_chart(props: &WeekChartProps) -> Html {
    if props.weeks.is_empty() {
        return html! {
            <div class="flex items-center justify-center h-full">
                <p class="text-gray-400">{"No activity this week yet."}</p>
            </div>
        };
    }

    let max_value = props
        .weeks
        .iter()
        .map(|w| w.wins.max(w.losses))
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let slot_width = CHART_WIDTH / props.weeks.len() as f64;
    let bar_width = (slot_width * 0.3).min(18.0);

    let bars = props
        .weeks
        .iter()
        .enumerate()
        .map(|(i, week)| {
            let center = slot_width * i as f64 + slot_width / 2.0;
            let win_height = BAR_AREA_HEIGHT * week.wins as f64 / max_value;
            let loss_height = BAR_AREA_HEIGHT * week.losses as f64 / max_value;

            html! {
                <g key={week.label.clone()}>
                    <rect
                        x={format!("{:.1}", center - bar_width - 1.0)}
                        y={format!("{:.1}", BAR_AREA_HEIGHT - win_height)}
                        width={format!("{:.1}", bar_width)}
                        height={format!("{:.1}", win_height)}
                        fill="#16a34a"
                    />
                    <rect
                        x={format!("{:.1}", center + 1.0)}
                        y={format!("{:.1}", BAR_AREA_HEIGHT - loss_height)}
                        width={format!("{:.1}", bar_width)}
                        height={format!("{:.1}", loss_height)}
                        fill="#dc2626"
                    />
                    <text
                        x={format!("{:.1}", center)}
                        y={format!("{:.1}", CHART_HEIGHT - 6.0)}
                        text-anchor="middle"
                        class="fill-gray-400"
                        font-size="10"
                    >
                        {week.label.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Html>();

    html! {
        <svg
            viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
            class="w-full h-full"
            preserveAspectRatio="xMidYMid meet"
        >
            {bars}
        </svg>
    }
}
