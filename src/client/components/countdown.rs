use dioxus::prelude::*;

use crate::client::util::{
    countdown::{self, CountdownState, Precision},
    time::{local_now, sleep},
};

/// Live time-until-departure text.
///
/// Renders nothing when the departure is unknown. The refresh task lives in a resource, so it
/// is dropped with the component and restarted when the departure or precision changes.
#[component]
pub fn Countdown(
    #[props(!optional)] date: Option<String>,
    #[props(!optional)] time: Option<String>,
    precision: Precision,
    class: Option<String>,
    /// Called when the countdown reaches its expired state.
    on_expire: Option<EventHandler<()>>,
) -> Element {
    let departure = use_memo(use_reactive((&date, &time), |(date, time)| {
        countdown::departure_instant(date.as_deref(), time.as_deref())
    }));
    let refresh = use_memo(use_reactive!(|precision| precision.refresh_interval()));
    let mut state = use_signal(|| None::<CountdownState>);

    use_resource(move || async move {
        let refresh = refresh();
        let Some(departure) = departure() else {
            state.set(None);
            return;
        };

        loop {
            let next = countdown::compute(departure, local_now());
            state.set(Some(next));
            if next.is_expired() {
                if let Some(on_expire) = on_expire {
                    on_expire.call(());
                }
                break;
            }
            sleep(refresh).await;
        }
    });

    let class = class.unwrap_or_default();
    let Some(current) = state() else {
        return rsx!();
    };
    let text_class = if current.is_expired() {
        "text-error"
    } else {
        "text-primary"
    };

    rsx!(
        span { class: "font-mono {text_class} {class}",
            "{current.text(precision)}"
        }
    )
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use chrono::Duration as ChronoDuration;

    use super::*;

    thread_local! {
        static EXPIRED: Cell<bool> = const { Cell::new(false) };
    }

    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        dom.rebuild_in_place();
        let _ = tokio::time::timeout(duration, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate_to_vec();
            }
        })
        .await;
    }

    #[component]
    fn PastDeparture() -> Element {
        rsx!(Countdown {
            date: Some("2000-01-01".to_string()),
            time: Some("08:00".to_string()),
            precision: Precision::Minutes,
            on_expire: move |_| EXPIRED.with(|expired| expired.set(true)),
        })
    }

    /// Departs two seconds after mount; starts at minute precision and switches to seconds.
    #[component]
    fn SwitchingPrecision() -> Element {
        let departure = use_hook(|| local_now() + ChronoDuration::seconds(2));
        let mut precision = use_signal(|| Precision::Minutes);
        use_future(move || async move {
            sleep(Duration::from_millis(100)).await;
            precision.set(Precision::Seconds);
        });

        rsx!(Countdown {
            date: Some(departure.format("%Y-%m-%d").to_string()),
            time: Some(departure.format("%H:%M:%S").to_string()),
            precision: precision(),
            on_expire: move |_| EXPIRED.with(|expired| expired.set(true)),
        })
    }

    #[tokio::test]
    async fn past_departure_reports_expiry_on_mount() {
        let mut dom = VirtualDom::new(PastDeparture);

        run_for(&mut dom, Duration::from_millis(500)).await;

        assert!(EXPIRED.with(|expired| expired.get()));
    }

    #[tokio::test]
    async fn precision_change_restarts_the_timer() {
        let mut dom = VirtualDom::new(SwitchingPrecision);

        run_for(&mut dom, Duration::from_secs(4)).await;

        assert!(EXPIRED.with(|expired| expired.get()));
    }
}
