use crate::shared::format::format_currency;
use crate::shared::icons::icon;
use contracts::domain::common::format_quantity;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Money,
    Count,
    /// Liters
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

fn format_value(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Money => format_currency(value),
        StatFormat::Count => format!("{}", value.round() as i64),
        StatFormat::Quantity => format!("{} L", format_quantity(value)),
    }
}

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// None while loading
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(optional)]
    tone: StatTone,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let tone_class = match tone {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_money_and_counts() {
        assert_eq!(format_value(150000.0, StatFormat::Money), "₹1,50,000.00");
        assert_eq!(format_value(12.0, StatFormat::Count), "12");
        assert_eq!(format_value(42.5, StatFormat::Quantity), "42.5 L");
    }
}
