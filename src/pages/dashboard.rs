//! Dashboard Page
//!
//! Read-only overview of document processing: headline metrics, status
//! tally and the recent activity feed.

use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::logging::error;
use leptos::*;

use crate::api::{
    ActivityStatus, ApiResult, Backend, DashboardMetrics, DocumentStatus, HttpBackend,
    RecentActivity,
};
use crate::components::{Alert, AlertVariant, Loading, StatCard};

pub const LOAD_FAILED: &str = "Failed to load dashboard data";

/// Everything the dashboard renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub metrics: DashboardMetrics,
    pub status: DocumentStatus,
    pub activity: Vec<RecentActivity>,
}

/// Issue the three reads concurrently; any failure fails the whole load.
pub async fn load_dashboard<B: Backend + ?Sized>(backend: &B) -> ApiResult<DashboardData> {
    let (metrics, status, activity) = futures::try_join!(
        backend.dashboard_metrics(),
        backend.document_status(),
        backend.recent_activity(),
    )?;

    Ok(DashboardData {
        metrics,
        status,
        activity,
    })
}

/// `$1,234.50`
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Whole numbers without a fraction, everything else to one decimal
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Render an ISO-8601 timestamp as `Jan 01, 2024 00:00` (UTC). Timestamps
/// without an offset are taken as UTC; anything unparsable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%b %d, %Y %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format(DISPLAY).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Icon and badge colour for an activity status
fn status_badge(status: ActivityStatus) -> (&'static str, &'static str) {
    match status {
        ActivityStatus::Success => ("✓", "bg-green-500"),
        ActivityStatus::Failed => ("✕", "bg-red-500"),
        ActivityStatus::Pending => ("⏱", "bg-yellow-500"),
        ActivityStatus::Review => ("⋯", "bg-blue-500"),
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let backend = store_value(HttpBackend::from_env());
    let data = create_rw_signal(DashboardData::default());
    let loading = create_rw_signal(true);
    let load_error = create_rw_signal(None::<&'static str>);

    // Fetch once on mount; no refresh
    create_effect(move |_| {
        let backend = backend.get_value();
        spawn_local(async move {
            match load_dashboard(&backend).await {
                Ok(loaded) => data.set(loaded),
                Err(e) => {
                    error!("Error loading dashboard data: {}", e);
                    load_error.set(Some(LOAD_FAILED));
                }
            }
            loading.set(false);
        });
    });

    move || {
        if loading.get() {
            return view! { <Loading /> }.into_view();
        }

        view! {
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>

                <Alert message=load_error variant=AlertVariant::Error />

                // Key metrics
                <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                    <StatCard
                        label="Total Documents"
                        icon="📄"
                        value=Signal::derive(move || data.with(|d| d.metrics.total_documents.to_string()))
                    />
                    <StatCard
                        label="Success Rate"
                        icon="✅"
                        value=Signal::derive(move || data.with(|d| format!("{}%", format_decimal(d.metrics.success_rate))))
                    />
                    <StatCard
                        label="Avg Processing Time"
                        icon="⏱"
                        value=Signal::derive(move || data.with(|d| format!("{}s", format_decimal(d.metrics.average_processing_time))))
                    />
                    <StatCard
                        label="Total Amount"
                        icon="💰"
                        value=Signal::derive(move || data.with(|d| format_amount(d.metrics.total_amount)))
                    />
                </div>
                <p class="text-sm text-gray-500">
                    {move || data.with(|d| format!("{} documents processed today", d.metrics.documents_today))}
                </p>

                <StatusTally data=data />
                <ActivityFeed data=data />
            </div>
        }
        .into_view()
    }
}

/// Document status breakdown
#[component]
fn StatusTally(data: RwSignal<DashboardData>) -> impl IntoView {
    let tile = move |label: &'static str, tone: &'static str, count: fn(&DocumentStatus) -> u64| {
        view! {
            <div class=format!("p-4 rounded-lg {}", tone)>
                <div class="text-sm font-medium">{label}</div>
                <div class="mt-1 text-2xl font-semibold">
                    {move || data.with(|d| count(&d.status))}
                </div>
            </div>
        }
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-4">"Document Status"</h2>
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-4">
                {tile("Pending", "bg-yellow-50 text-yellow-900", |s| s.pending)}
                {tile("Processed", "bg-green-50 text-green-900", |s| s.processed)}
                {tile("Failed", "bg-red-50 text-red-900", |s| s.failed)}
                {tile("In Review", "bg-blue-50 text-blue-900", |s| s.in_review)}
            </div>
        </section>
    }
}

/// Recent activity, in the order the backend returned it
#[component]
fn ActivityFeed(data: RwSignal<DashboardData>) -> impl IntoView {
    view! {
        <section class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-4">"Recent Activity"</h2>

            {move || {
                let entries = data.with(|d| d.activity.clone());
                if entries.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm">"No recent activity"</p>
                    }.into_view();
                }

                let last = entries.len() - 1;
                view! {
                    <ul>
                        {entries.into_iter().enumerate().map(|(index, entry)| {
                            view! { <ActivityRow entry=entry connector={index != last} /> }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </section>
    }
}

#[component]
fn ActivityRow(
    entry: RecentActivity,
    /// Draw the vertical line down to the next entry
    connector: bool,
) -> impl IntoView {
    let (icon, badge) = status_badge(entry.status);

    view! {
        <li class="relative pb-8">
            {connector.then(|| view! {
                <span class="absolute top-4 left-4 -ml-px h-full w-0.5 bg-gray-200" aria-hidden="true" />
            })}
            <div class="relative flex space-x-3">
                <span class=format!(
                    "h-8 w-8 rounded-full flex items-center justify-center ring-8 ring-white text-white {}",
                    badge
                )>
                    {icon}
                </span>
                <div class="min-w-0 flex-1 pt-1.5 flex justify-between space-x-4">
                    <div>
                        <p class="text-sm text-gray-500">
                            {entry.document_name}
                            {entry.amount.map(|amount| view! {
                                <span class="font-medium text-gray-900">{format!(" - {}", format_amount(amount))}</span>
                            })}
                        </p>
                        <p class="text-sm text-gray-500">{format_timestamp(&entry.timestamp)}</p>
                    </div>
                    {entry.error.map(|err| view! {
                        <div class="text-sm text-red-500">{err}</div>
                    })}
                </div>
            </div>
        </li>
    }
}
