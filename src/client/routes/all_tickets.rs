use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        browser,
        components::{
            dashboard::role_gate::Guard, EmptyState, ErrorMessage, Loading, Page, SectionTitle,
            TicketCard,
        },
        store::query::{use_query, QueryKey, QueryResource},
        util::{
            catalog::{CatalogFilter, CatalogView, SortMode},
            guard::Access,
        },
    },
    model::ticket::{TicketDto, TransportType},
};

#[component]
fn SearchBar(initial: CatalogFilter, on_search: EventHandler<CatalogFilter>) -> Element {
    let mut from = use_signal(|| initial.from.clone());
    let mut to = use_signal(|| initial.to.clone());
    let mut transport = use_signal(String::new);

    use_effect(use_reactive!(|initial| {
        from.set(initial.from);
        to.set(initial.to);
    }));

    rsx!(
        form {
            class: "flex flex-col md:flex-row gap-2 w-full",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_search.call(CatalogFilter {
                    from: from(),
                    to: to(),
                    transport: TransportType::parse(&transport()),
                });
            },
            input {
                class: "input input-bordered flex-1",
                placeholder: "From",
                value: "{from}",
                oninput: move |e| from.set(e.value()),
            }
            input {
                class: "input input-bordered flex-1",
                placeholder: "To",
                value: "{to}",
                oninput: move |e| to.set(e.value()),
            }
            select {
                class: "select select-bordered",
                value: "{transport}",
                onchange: move |e| transport.set(e.value()),
                option { value: "", "All transport" }
                for kind in TransportType::ALL {
                    option { value: "{kind}", "{kind}" }
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Search" }
        }
    )
}

#[component]
fn CatalogGrid(tickets: Vec<TicketDto>, initial: CatalogFilter) -> Element {
    let mut view = use_signal(|| CatalogView::with_filter(initial.clone()));

    // Following a route link while the catalog is open replaces the search.
    use_effect(use_reactive!(|initial| {
        if view.peek().filter() != &initial {
            view.write().set_filter(initial);
        }
    }));

    let mut snapshot = view();
    let visible = snapshot.visible(&tickets);
    let pagination = snapshot.pagination();
    let sort = snapshot.sort();

    let go_to = use_callback(move |page: usize| {
        let mut view = view.write();
        view.arrange(&tickets);
        if view.go_to(page) {
            browser::scroll_to_top();
        }
    });

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-col lg:flex-row gap-4 items-center",
                SearchBar { initial, on_search: move |filter| view.write().set_filter(filter) }
                select {
                    class: "select select-bordered w-full lg:w-60",
                    value: "{sort.as_str()}",
                    onchange: move |e| view.write().set_sort(SortMode::parse(&e.value())),
                    for mode in SortMode::ALL {
                        option { value: "{mode.as_str()}", selected: mode == sort, "{mode.label()}" }
                    }
                }
            }
            if visible.is_empty() {
                EmptyState { message: "No tickets match your search" }
            } else {
                div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for ticket in visible {
                        TicketCard { key: "{ticket.id}", ticket }
                    }
                }
            }
            if pagination.total_pages() > 1 {
                div { class: "join self-center mt-4",
                    button {
                        class: "join-item btn",
                        disabled: !pagination.has_previous(),
                        onclick: move |_| go_to.call(pagination.page() - 1),
                        "«"
                    }
                    for page in pagination.page_numbers() {
                        button {
                            class: if page == pagination.page() { "join-item btn btn-active" } else { "join-item btn" },
                            onclick: move |_| go_to.call(page),
                            "{page}"
                        }
                    }
                    button {
                        class: "join-item btn",
                        disabled: !pagination.has_next(),
                        onclick: move |_| go_to.call(pagination.page() + 1),
                        "»"
                    }
                }
            }
        }
    )
}

#[component]
pub fn AllTickets(from: String, to: String) -> Element {
    rsx!(
        Title { "TicketMaster | All Tickets" }
        Guard { access: Access::Authenticated,
            Catalog { filter: CatalogFilter::route(from, to) }
        }
    )
}

#[component]
fn Catalog(filter: CatalogFilter) -> Element {
    let tickets = use_query(QueryKey::new(QueryResource::Catalog), |api, _| async move {
        api.get_tickets(None).await
    });

    rsx!(
        Page {
            SectionTitle {
                title: "All Tickets",
                subtitle: "Search by route, filter by transport and sort by price.",
            }
            {match &*tickets.read() {
                None => rsx!(Loading {}),
                Some(Err(e)) => rsx!(ErrorMessage { message: e.user_message("Failed to load tickets") }),
                Some(Ok(list)) => rsx!(CatalogGrid { tickets: list.clone(), initial: filter.clone() }),
            }}
        }
    )
}
