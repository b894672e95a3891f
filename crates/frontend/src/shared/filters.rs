//! Filter criteria state for list pages and the panel that edits it.

use contracts::shared::filter::{apply_filters, FilterCriteria, Filterable, FACET_ANY};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Categorical filter shown as a select in [`FilterBar`]
#[derive(Debug, Clone, Copy)]
pub struct FacetDef {
    pub key: &'static str,
    pub label: &'static str,
    /// (value, label)
    pub options: &'static [(&'static str, &'static str)],
}

pub const STATUS_FACET: FacetDef = FacetDef {
    key: "status",
    label: "Status",
    options: &[("active", "Active"), ("inactive", "Inactive")],
};

/// Filtered view of `items`, recomputed whenever the items or the criteria change
pub fn use_filters<T>(items: Signal<Vec<T>>, criteria: RwSignal<FilterCriteria>) -> Memo<Vec<T>>
where
    T: Filterable + Clone + PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| items.with(|items| criteria.with(|c| apply_filters(items, c))))
}

/// Number of constraints currently applied (search counts as one)
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    let search = usize::from(!criteria.search.trim().is_empty());
    search + criteria.active_facets().count()
}

/// Search box plus one select per facet, writing into `criteria`
#[component]
pub fn FilterBar(
    criteria: RwSignal<FilterCriteria>,
    #[prop(optional)] facets: &'static [FacetDef],
    #[prop(optional, into)] placeholder: String,
    /// Shown next to the title: "{shown} of {total}"
    #[prop(into)]
    shown: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let search = RwSignal::new(criteria.with_untracked(|c| c.search.clone()));
    Effect::new(move |_| {
        let value = search.get();
        criteria.update(|c| c.search = value);
    });

    let facet_signals: Vec<(FacetDef, RwSignal<String>)> = facets
        .iter()
        .map(|facet| {
            let key = facet.key;
            let value = RwSignal::new(criteria.with_untracked(|c| c.facet(key).to_string()));
            Effect::new(move |_| {
                let v = value.get();
                criteria.update(|c| c.set_facet(key, v));
            });
            (*facet, value)
        })
        .collect();
    let facet_values = StoredValue::new(facet_signals.iter().map(|(_, v)| *v).collect::<Vec<_>>());

    let reset = move |_| {
        search.set(String::new());
        facet_values.with_value(|values| {
            for v in values {
                v.set(FACET_ANY.to_string());
            }
        });
    };

    let active_count = Signal::derive(move || criteria.with(active_filter_count));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <span class="filter-panel__counter">
                        {move || format!("{} of {}", shown.get(), total.get())}
                    </span>
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search placeholder=placeholder />
                    </div>
                    {facet_signals
                        .into_iter()
                        .map(|(facet, value)| {
                            view! {
                                <div class="filter-panel__field">
                                    <label class="form__label">{facet.label}</label>
                                    <Select value=value>
                                        <option value=FACET_ANY>"All"</option>
                                        {facet
                                            .options
                                            .iter()
                                            .map(|(v, label)| view! { <option value=*v>{*label}</option> })
                                            .collect_view()}
                                    </Select>
                                </div>
                            }
                        })
                        .collect_view()}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=reset
                        disabled=Signal::derive(move || active_count.get() == 0)
                    >
                        "Reset"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryForm};
    use contracts::domain::common::{AggregateId, Entity, EntityStatus};

    fn category(slug: &str, status: EntityStatus) -> Category {
        let mut form = CategoryForm {
            slug: slug.to_string(),
            status,
            ..Default::default()
        };
        form.translation_mut("en").title = slug.to_string();
        Category::from_form(AggregateId::generate(), form)
    }

    #[test]
    fn test_use_filters_tracks_items_and_criteria() {
        let owner = Owner::new();
        owner.with(|| {
            let general = category("general", EntityStatus::Active);
            let vip = category("vip", EntityStatus::Inactive);
            let items = RwSignal::new(vec![general.clone(), vip.clone()]);
            let criteria = RwSignal::new(FilterCriteria::new());
            let filtered = use_filters(items.into(), criteria);

            assert_eq!(filtered.get(), vec![general.clone(), vip.clone()]);

            criteria.update(|c| c.set_facet("status", "active"));
            assert_eq!(filtered.get(), vec![general.clone()]);

            let spa = category("spa", EntityStatus::Active);
            items.update(|v| v.push(spa.clone()));
            assert_eq!(filtered.get(), vec![general, spa]);
        });
    }

    #[test]
    fn test_active_filter_count() {
        let criteria = FilterCriteria::new()
            .with_search(" pool ")
            .with_facet("status", "active")
            .with_facet("kind", FACET_ANY);
        assert_eq!(active_filter_count(&criteria), 2);
        assert_eq!(active_filter_count(&FilterCriteria::new()), 0);
    }
}
