use yew::prelude::*;

use crate::chart::{legend_opacity, ChartGeometry, RevealTimeline, Series, SYMPTOM_DATA};
use crate::hooks::animation_frame::AnimationFrameLoop;
use crate::hooks::scroll_animation::use_scroll_animation;

const CHART_THRESHOLD: f64 = 0.3;

#[function_component(SymptomChart)]
pub fn symptom_chart() -> Html {
    let (chart_ref, is_visible) = use_scroll_animation(CHART_THRESHOLD);
    let progress = use_state(|| vec![0.0; SYMPTOM_DATA.len()]);

    // Starts once the chart scrolls into view; the flag never goes back to
    // false so this runs at most once.
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |is_visible| {
                let frame_loop = if *is_visible {
                    let timeline = RevealTimeline::new(SYMPTOM_DATA.len());
                    log::debug!("Symptom chart visible, starting reveal");
                    AnimationFrameLoop::start(move |elapsed| {
                        let next = timeline.progress_at(elapsed);
                        let done = RevealTimeline::is_complete(&next);
                        progress.set(next);
                        !done
                    })
                } else {
                    None
                };
                move || drop(frame_loop)
            },
            is_visible,
        );
    }

    let geometry = ChartGeometry::default();
    let count = SYMPTOM_DATA.len();
    let point_progress = |i: usize| progress.get(i).copied().unwrap_or(0.0);

    let grid_lines = (0..=geometry.max_value as u32).map(|value| {
        let y = geometry.y_position(value as f64, 1.0);
        html! {
            <line
                key={value}
                x1={geometry.padding.to_string()}
                y1={y.to_string()}
                x2={(geometry.width - geometry.padding).to_string()}
                y2={y.to_string()}
                stroke="#d1d5db"
                stroke-width="1.5"
                stroke-dasharray="6 6"
                opacity="0.4"
            />
        }
    });

    let series_paths = Series::ALL.iter().map(|series| {
        html! {
            <path
                key={series.label()}
                d={geometry.series_path(&SYMPTOM_DATA, *series, &progress)}
                fill="none"
                stroke={series.color()}
                stroke-width="5"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        }
    });

    let markers = SYMPTOM_DATA.iter().enumerate().map(|(i, point)| {
        let x = geometry.x_position(i, count);
        let p = point_progress(i);
        html! {
            <g key={point.day}>
                { for Series::ALL.iter().map(|series| html! {
                    <circle
                        cx={x.to_string()}
                        cy={geometry.y_position(series.value(point), p).to_string()}
                        r="10"
                        fill={series.color()}
                        opacity={p.to_string()}
                        style="transition: opacity 0.5s ease-out;"
                    />
                }) }
            </g>
        }
    });

    let day_labels = SYMPTOM_DATA.iter().enumerate().map(|(i, point)| {
        html! {
            <text
                key={point.day}
                x={geometry.x_position(i, count).to_string()}
                y={(geometry.height - 25.0).to_string()}
                text-anchor="middle"
                class="chart-day-label"
                opacity={point_progress(i).to_string()}
            >
                {point.day}
            </text>
        }
    });

    let legend_style = format!(
        "opacity: {}; transition: opacity 0.8s ease-out;",
        legend_opacity(&progress)
    );

    html! {
        <div ref={chart_ref} class="symptom-chart">
            <h3>{"Symptom Trends"}</h3>
            <svg viewBox={format!("0 0 {} {}", geometry.width, geometry.height)} class="symptom-chart-svg">
                { for grid_lines }
                { for series_paths }
                { for markers }
                { for day_labels }
            </svg>
            <div class="symptom-chart-legend">
                { for Series::ALL.iter().map(|series| html! {
                    <div key={series.label()} class="legend-item" style={legend_style.clone()}>
                        <div class="legend-swatch" style={format!("background-color: {};", series.color())}></div>
                        <span>{series.label()}</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .symptom-chart {
                    position: relative;
                    width: 100%;
                    padding: 2rem 0;
                }
                .symptom-chart h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .symptom-chart-svg {
                    width: 100%;
                    height: auto;
                    filter: drop-shadow(0 4px 12px rgba(0, 0, 0, 0.1));
                }
                .chart-day-label {
                    font-size: 1rem;
                    font-weight: 600;
                    fill: rgba(17, 24, 39, 0.7);
                }
                .symptom-chart-legend {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-top: 2.5rem;
                }
                .legend-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .legend-swatch {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                }
                "#}
            </style>
        </div>
    }
}
