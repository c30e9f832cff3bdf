//! 通用展示组件

use leptos::prelude::*;

use crate::loader::LoadState;
use crate::render::{
    BarRect, CHART_HEIGHT, CHART_WIDTH, ChartData, badge_tone, bar_layout, format_currency,
    format_percent, progress_width, share_percent, status_text,
};

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 面板正在显示示例数据时的标记
#[component]
pub fn SampleNotice() -> impl IntoView {
    view! {
        <span class="badge badge-outline badge-warning" title="Live data unavailable">
            "Sample data"
        </span>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = badge_tone(&status).class();
    view! { <span class=class>{status_text(&status)}</span> }
}

/// 进度条：宽度为 value / total，限制在 0..=100%
#[component]
pub fn ProgressBar(
    value: f64,
    #[prop(default = 100.0)] total: f64,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    let width = progress_width(value, total);
    let text = caption.unwrap_or_else(|| format_percent(share_percent(value, total).round()));
    view! {
        <div class="w-full bg-base-200 rounded-full h-5 overflow-hidden">
            <div
                class="bg-primary text-primary-content text-xs h-5 px-2 whitespace-nowrap"
                style:width=width
            >
                {text}
            </div>
        </div>
    }
}

/// 柱状图（第一个数据集）
#[component]
pub fn BarChart(chart: ChartData) -> impl IntoView {
    let bars = bar_layout(&chart);
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let legend = chart
        .datasets
        .first()
        .map(|d| d.label.clone())
        .unwrap_or_default();

    let rects = bars
        .iter()
        .map(|bar: &BarRect| {
            view! {
                <rect
                    class="fill-primary"
                    x=bar.x.to_string()
                    y=bar.y.to_string()
                    width=bar.width.to_string()
                    height=bar.height.to_string()
                ></rect>
            }
        })
        .collect_view();

    let labels = bars
        .into_iter()
        .map(|bar| {
            view! {
                <div class="flex-1 text-center">
                    <div class="font-semibold">{format_currency(bar.value)}</div>
                    <div class="text-base-content/60">{bar.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <figure class="w-full">
            <svg class="w-full h-48" viewBox=view_box preserveAspectRatio="none">
                {rects}
            </svg>
            <div class="flex text-xs mt-2">{labels}</div>
            <figcaption class="text-xs text-base-content/60 mt-1">{legend}</figcaption>
        </figure>
    }
}

/// 收入构成：四段横向堆叠条 + 图例
#[component]
pub fn IncomeSplit(chart: ChartData) -> impl IntoView {
    const TONES: [&str; 4] = ["bg-primary", "bg-success", "bg-info", "bg-warning"];

    let values = chart
        .datasets
        .first()
        .map(|d| d.values.clone())
        .unwrap_or_default();
    let sum: f64 = values.iter().sum();

    let segments = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let class = format!("h-6 {}", TONES[i % TONES.len()]);
            view! { <div class=class style:width=progress_width(value, sum)></div> }
        })
        .collect_view();

    let legend = chart
        .labels
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| {
            let dot = format!("inline-block w-3 h-3 rounded-full {}", TONES[i % TONES.len()]);
            view! {
                <li class="flex items-center gap-2">
                    <span class=dot></span>
                    {label}
                    <span class="ml-auto font-semibold">{format_percent(value)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-3">
            <div class="flex w-full rounded overflow-hidden">{segments}</div>
            <ul class="text-sm space-y-1">{legend}</ul>
        </div>
    }
}

/// 数据面板：加载中显示转圈，渲染完成后调用 `render`，示例数据带标记
#[component]
pub fn Panel<T, F, V>(
    #[prop(into)] title: String,
    state: RwSignal<LoadState<T>>,
    render: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="card-title">{title}</h3>
                    <Show when=move || state.with(|s| s.is_sample())>
                        <SampleNotice />
                    </Show>
                </div>
                {move || match state.get() {
                    LoadState::Rendered(loaded) => render(loaded.data).into_any(),
                    LoadState::Idle | LoadState::Loading => view! { <Loading /> }.into_any(),
                }}
            </div>
        </div>
    }
}
