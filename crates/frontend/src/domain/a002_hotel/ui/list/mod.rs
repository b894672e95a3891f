use contracts::domain::a002_hotel::aggregate::{Hotel, HotelId};
use contracts::shared::filter::FilterCriteria;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::HotelDetails;
use super::posts::HotelPosts;
use crate::domain::a002_hotel::store::use_properties;
use crate::shared::components::ui::StatusBadge;
use crate::shared::dialogs::confirm;
use crate::shared::filters::{use_filters, FacetDef, FilterBar, STATUS_FACET};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, get_sort_class, get_sort_indicator, highlight_matches, sort_list, Sortable,
};
use crate::shared::modal_controller::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const HOTEL_FACETS: &[FacetDef] = &[STATUS_FACET];

impl Sortable for Hotel {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => cmp_ci(&self.email, &other.email),
            "posts" => self.posts.len().cmp(&other.posts.len()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

fn delete_prompt(hotel: &Hotel) -> String {
    match hotel.posts.len() {
        0 => format!("Delete property '{}'?", hotel.name),
        n => format!("Delete property '{}' and its {} post(s)?", hotel.name, n),
    }
}

#[component]
pub fn HotelList() -> impl IntoView {
    let store = use_properties();

    let criteria = RwSignal::new(FilterCriteria::new());
    let filtered = use_filters(store.signal(), criteria);
    let details = use_modal::<Hotel>();
    let posts = use_modal::<HotelId>();

    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);

    let rows = Memo::new(move |_| {
        let mut items = filtered.get();
        let field = sort_field.get();
        if !field.is_empty() {
            sort_list(&mut items, &field, sort_ascending.get());
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

    let delete_hotel = move |hotel: Hotel| {
        if !confirm(&delete_prompt(&hotel)) {
            return;
        }
        spawn_local(async move {
            store.delete(hotel.id).await;
        });
    };

    view! {
        <PageFrame page_id="a002_hotel--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Properties"</h1>
                    <Badge>{move || store.len().to_string()}</Badge>
                    {move || store.is_loading().then(|| view! { <Spinner /> })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| details.open_modal(None)
                    >
                        {icon("plus")}
                        " New property"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterBar
                    criteria=criteria
                    facets=HOTEL_FACETS
                    placeholder="Name, email or address..."
                    shown=Signal::derive(move || filtered.with(Vec::len))
                    total=Signal::derive(move || store.len())
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    {sort_header("name", "Name")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    {sort_header("email", "Email")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Address"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>
                                    {sort_header("posts", "Posts")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let search = criteria.with(|c| c.search.clone());
                                rows.get().into_iter().map(|hotel| {
                                    let hotel_id = hotel.id;
                                    let post_summary = format!("{} / {}", hotel.published_count(), hotel.posts.len());
                                    let for_edit = hotel.clone();
                                    let for_delete = hotel.clone();
                                    let status = hotel.status;
                                    let Hotel { name, email, phone, address, .. } = hotel;
                                    let (name_search, email_search, address_search) =
                                        (search.clone(), search.clone(), search.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{highlight_matches(&name, &name_search)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {highlight_matches(&email, &email_search)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {highlight_matches(&address, &address_search)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span title="published / total">{post_summary}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| posts.open_modal(Some(hotel_id))
                                                    attr:title="Posts"
                                                >
                                                    {icon("file-text")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| details.open_modal(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_hotel(for_delete.clone())
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
                            .then(|| view! { <div class="table__empty">"No properties match the filters"</div> })
                    }}
                </div>

                {move || details.is_open().then(|| view! { <HotelDetails modal=details /> })}
                {move || posts.is_open().then(|| view! { <HotelPosts modal=posts /> })}
            </div>
        </PageFrame>
    }
}
