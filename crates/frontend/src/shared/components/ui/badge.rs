use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

pub fn status_variant(status: EntityStatus) -> &'static str {
    match status {
        EntityStatus::Active => "success",
        EntityStatus::Inactive => "neutral",
    }
}

/// Active/inactive badge
#[component]
pub fn StatusBadge(status: EntityStatus) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status)>{status.label()}</Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(EntityStatus::Active), "success");
        assert_eq!(status_variant(EntityStatus::Inactive), "neutral");
    }
}
