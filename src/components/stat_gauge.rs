//! Stat Gauge Component
//!
//! Labeled bar that fills up shortly after mount.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::STAT_MAX;

/// Delay before the bar starts filling, in milliseconds
const FILL_DELAY_MS: u32 = 100;

/// Fill percentage, capped at 100
pub fn gauge_percent(value: u32, max_value: u32) -> f64 {
    if max_value == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(max_value) * 100.0).min(100.0)
}

#[component]
pub fn StatGauge(
    label: &'static str,
    value: u32,
    #[prop(into)] color: String,
    #[prop(default = STAT_MAX)] max_value: u32,
) -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);
    let target = gauge_percent(value, max_value);

    spawn_local(async move {
        TimeoutFuture::new(FILL_DELAY_MS).await;
        // Gone if the gauge unmounted meanwhile
        let _ = set_progress.try_set(target);
    });

    view! {
        <div class="stat-gauge">
            <div class="stat-label">{label}</div>
            <div class="stat-track">
                <div
                    class="stat-fill"
                    style=move || format!("width: {}%; background-color: {};", progress.get(), color)
                ></div>
            </div>
            <div class="stat-value">{value}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_max() {
        assert_eq!(gauge_percent(0, 255), 0.0);
        assert_eq!(gauge_percent(255, 255), 100.0);
        assert!((gauge_percent(51, 255) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_is_capped() {
        assert_eq!(gauge_percent(300, 255), 100.0);
        assert_eq!(gauge_percent(10, 0), 0.0);
    }
}
