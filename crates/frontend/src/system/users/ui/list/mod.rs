use contracts::shared::filter::FilterCriteria;
use contracts::system::users::{is_last_active_owner, Section, User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::UserDetails;
use crate::shared::components::ui::StatusBadge;
use crate::shared::dialogs::confirm;
use crate::shared::filters::{use_filters, FacetDef, FilterBar, STATUS_FACET};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, get_sort_class, get_sort_indicator, highlight_matches, sort_list, Sortable,
};
use crate::shared::modal_controller::use_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::store::use_users;

const USER_FACETS: &[FacetDef] = &[
    FacetDef {
        key: "role",
        label: "Role",
        options: &[
            ("owner", "Owner"),
            ("admin", "Admin"),
            ("editor", "Editor"),
            ("viewer", "Viewer"),
        ],
    },
    STATUS_FACET,
];

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => cmp_ci(&self.email, &other.email),
            "role" => self.role.as_str().cmp(other.role.as_str()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

fn role_badge(role: UserRole) -> AnyView {
    let class = match role {
        UserRole::Owner => "badge badge--primary",
        UserRole::Admin => "badge badge--warning",
        UserRole::Editor => "badge badge--success",
        UserRole::Viewer => "badge badge--neutral",
    };
    view! { <span class=class>{role.label()}</span> }.into_any()
}

/// "3 / 8 sections" for editors, the role's blanket rule otherwise
fn access_summary(user: &User) -> String {
    match user.role {
        UserRole::Owner | UserRole::Admin => "Full access".to_string(),
        UserRole::Viewer => "Read only".to_string(),
        UserRole::Editor => {
            let granted = Section::ALL.iter().filter(|s| user.can_edit(**s)).count();
            format!("{} / {} sections", granted, Section::ALL.len())
        }
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let store = use_users();

    let criteria = RwSignal::new(FilterCriteria::new());
    let filtered = use_filters(store.signal(), criteria);
    let modal = use_modal::<User>();
    let (error, set_error) = signal::<Option<String>>(None);

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

    let delete_user = move |user: User| {
        if store.with_untracked(|users| is_last_active_owner(users, &user)) {
            set_error.set(Some(format!("{} is the last active owner", user.name)));
            return;
        }
        if !confirm(&format!("Delete user '{}'?", user.name)) {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            store.delete(user.id).await;
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || store.len().to_string()}</Badge>
                    {move || store.is_loading().then(|| view! { <Spinner /> })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.open_modal(None)
                    >
                        {icon("plus")}
                        " New user"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterBar
                    criteria=criteria
                    facets=USER_FACETS
                    placeholder="Name or email..."
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
                                <TableHeaderCell resizable=false min_width=200.0>
                                    {sort_header("email", "Email")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header("role", "Role")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Access"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    {sort_header("status", "Status")}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let search = criteria.with(|c| c.search.clone());
                                rows.get().into_iter().map(|user| {
                                    let access = access_summary(&user);
                                    let initials = user.initials();
                                    let (role, status) = (user.role, user.status);
                                    let for_edit = user.clone();
                                    let for_delete = user.clone();
                                    let User { name, email, .. } = user;
                                    let (name_search, email_search) = (search.clone(), search.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="avatar">{initials}</span>
                                                    <span style="font-weight: 500;">{highlight_matches(&name, &name_search)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {highlight_matches(&email, &email_search)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{role_badge(role)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{access}</TableCellLayout>
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
                                                    on_click=move |_| delete_user(for_delete.clone())
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
                            .then(|| view! { <div class="table__empty">"No users match the filters"</div> })
                    }}
                </div>

                {move || modal.is_open().then(|| view! { <UserDetails modal=modal /> })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::users::store::seed;

    #[test]
    fn test_access_summary() {
        let users = seed();
        assert_eq!(access_summary(&users[0]), "Full access");
        assert_eq!(access_summary(&users[2]), "4 / 8 sections");
        assert_eq!(access_summary(&users[3]), "Read only");
    }

    #[test]
    fn test_last_active_owner() {
        let mut users = seed();
        let owner = users[0].clone();
        assert!(is_last_active_owner(&users, &owner));
        assert!(!is_last_active_owner(&users, &users[1]));

        let mut second = owner.clone();
        second.id = contracts::system::users::UserId::from_u128(0x4999);
        users.push(second);
        assert!(!is_last_active_owner(&users, &owner));
    }
}
