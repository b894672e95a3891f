use contracts::domain::a001_category::aggregate::{Category, CategoryKind};
use contracts::shared::filter::FilterCriteria;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::CategoryDetails;
use crate::domain::a001_category::store::use_categories;
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::use_config;
use crate::shared::dialogs::confirm;
use crate::shared::filters::{use_filters, FacetDef, FilterBar, STATUS_FACET};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, get_sort_class, get_sort_indicator, highlight_matches, sort_list, Sortable,
};
use crate::shared::modal_controller::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const CATEGORY_FACETS: &[FacetDef] = &[
    STATUS_FACET,
    FacetDef {
        key: "kind",
        label: "Type",
        options: &[("system", "System"), ("custom", "Custom")],
    },
];

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "features" => self.feature_count.cmp(&other.feature_count),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => cmp_ci(&self.slug, &other.slug),
        }
    }
}

/// `sort_list` with titles compared in `locale`
fn sort_categories(items: &mut [Category], field: &str, ascending: bool, locale: &str) {
    if field != "title" {
        sort_list(items, field, ascending);
        return;
    }
    items.sort_by(|a, b| {
        let cmp = cmp_ci(a.title(locale), b.title(locale));
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let store = use_categories();
    let config = use_config();
    let locale = StoredValue::new(config.default_locale.clone());

    let criteria = RwSignal::new(FilterCriteria::new());
    let filtered = use_filters(store.signal(), criteria);
    let modal = use_modal::<Category>();
    let (error, set_error) = signal::<Option<String>>(None);

    // empty field = store order
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);

    let rows = Memo::new(move |_| {
        let mut items = filtered.get();
        let field = sort_field.get();
        if !field.is_empty() {
            sort_categories(&mut items, &field, sort_ascending.get(), &locale.get_value());
        }
        items
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get_untracked() == field {
                sort_ascending.update(|asc| *asc = !*asc);
            } else {
                sort_field.set(field.to_string());
                sort_ascending.set(true);
            }
        }
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                {label}
                <span class=move || get_sort_class(&sort_field.get(), field)>
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </div>
        }
    };

    let delete_category = move |category: Category| {
        if category.kind == CategoryKind::System {
            set_error.set(Some(format!(
                "System category '{}' cannot be deleted",
                category.slug
            )));
            return;
        }
        let title = category.title(&locale.get_value()).to_string();
        if !confirm(&format!("Delete category '{}'?", title)) {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            store.delete(category.id).await;
        });
    };

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <Badge>{move || store.len().to_string()}</Badge>
                    {move || store.is_loading().then(|| view! { <Spinner /> })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.open_modal(None)
                    >
                        {icon("plus")}
                        " New category"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterBar
                    criteria=criteria
                    facets=CATEGORY_FACETS
                    placeholder="Slug or title..."
                    shown=Signal::derive(move || filtered.with(Vec::len))
                    total=Signal::derive(move || store.len())
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=48.0></TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {sort_header("slug", "Slug")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    {sort_header("title", "Title")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Type"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header("features", "Features")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Languages"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let search = criteria.with(|c| c.search.clone());
                                rows.get().into_iter().map(|category| {
                                    let title = category.title(&locale.get_value()).to_string();
                                    let locales = category
                                        .locales()
                                        .map(|l| l.to_uppercase())
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    let for_edit = category.clone();
                                    let for_delete = category.clone();
                                    let Category { icon: icon_name, slug, kind, feature_count, status, .. } = category;
                                    let (slug_search, title_search) = (search.clone(), search.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{icon(&icon_name)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <code>{highlight_matches(&slug, &slug_search)}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{highlight_matches(&title, &title_search)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match kind {
                                                        CategoryKind::System => view! { <span class="badge badge--primary">"System"</span> }.into_any(),
                                                        CategoryKind::Custom => view! { <span class="badge badge--neutral">"Custom"</span> }.into_any(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{feature_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{locales}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.open_modal(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_category(for_delete.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    {move || {
                        rows.with(Vec::is_empty)
                            .then(|| view! { <div class="table__empty">"No categories match the filters"</div> })
                    }}
                </div>

                {move || modal.is_open().then(|| view! { <CategoryDetails modal=modal /> })}
            </div>
        </PageFrame>
    }
}
