//! Metric Card Component
//!
//! A labelled headline number.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Label above the value
    #[prop(into)]
    label: String,
    /// Formatted value
    #[prop(into)]
    value: String,
    /// Optional icon shown next to the label
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {icon.map(|icon| view! { <span class="text-xl">{icon}</span> })}
            </div>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}
